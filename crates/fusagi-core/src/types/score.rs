//! 得点（Score）

use super::Color;

/// 最終得点（先手の石数 − 後手の石数）
///
/// 終局時のみ意味を持つ。値域は [-25, +25]。先手は最大化、後手は最小化を狙う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Score(i32);

impl Score {
    /// 引き分け
    pub const ZERO: Score = Score(0);
    /// 先手の理論上の最大得点
    pub const MAX: Score = Score(25);
    /// 先手の理論上の最小得点
    pub const MIN: Score = Score(-25);

    /// 値から生成
    #[inline]
    pub const fn new(v: i32) -> Score {
        Score(v)
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// 手番側にとって最悪の得点。ミニマックス畳み込みの初期値に使う。
    #[inline]
    pub const fn worst_for(c: Color) -> Score {
        match c {
            Color::First => Score::MIN,
            Color::Second => Score::MAX,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
