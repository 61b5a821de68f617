//! 手番（Color）

/// 手番（先手/後手）
///
/// 先手は奇数手番（1-indexed）で着手する。得点は先手視点で数える。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    First = 0,
    Second = 1,
}

impl Color {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::First => Color::Second,
            Color::Second => Color::First,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// ビットボード上の占有プレーンのシフト量（先手=0, 後手=25）
    #[inline]
    pub const fn plane_shift(self) -> u32 {
        self as u32 * 25
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_opponent() {
        assert_eq!(Color::First.opponent(), Color::Second);
        assert_eq!(Color::Second.opponent(), Color::First);
    }

    #[test]
    fn test_color_not() {
        assert_eq!(!Color::First, Color::Second);
        assert_eq!(!Color::Second, Color::First);
    }

    #[test]
    fn test_color_plane_shift() {
        assert_eq!(Color::First.plane_shift(), 0);
        assert_eq!(Color::Second.plane_shift(), 25);
    }
}
