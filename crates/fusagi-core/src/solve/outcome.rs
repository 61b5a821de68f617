//! 評価戦略（Outcome）
//!
//! 完全対局の得点を伝播するミニマックス方式と、全終局の勝敗数を合算する
//! 全数集計方式を、同一インターフェースの戦略として提供する。戦略は
//! ジェネリクスで単相化され、探索の内側に実行時分岐を持ち込まない。

use std::cmp::Ordering;

use crate::board::Board;
use crate::types::{Color, Score};

/// 探索結果の集約戦略
///
/// スロットのライフサイクル: 初訪問時に `unresolved` で作られ、子孫が
/// すべて確定した時点で一度だけ最終値に上書きされる。以後は読み取り専用。
pub trait Outcome {
    /// スロットに格納される値
    type Value: Copy;

    /// テーブル容量（2の冪の指数）
    ///
    /// 初期局面から到達可能な正準局面数（8,659,987）を上回るように選ぶ。
    const TABLE_BITS: u32;

    /// 未確定スロットの初期値。`combine` の単位元でもある。
    fn unresolved(board: Board) -> Self::Value;

    /// 終局局面の値
    fn leaf(board: Board) -> Self::Value;

    /// 子の結果を手番 `mover` の親へ畳み込む
    fn combine(mover: Color, acc: Self::Value, child: Self::Value) -> Self::Value;

    /// 手番 `mover` にとっての優劣。`Greater` なら `a` が優る。着手助言用。
    fn prefer(mover: Color, a: Self::Value, b: Self::Value) -> Ordering;
}

/// ミニマックス方式
///
/// 完全対局を仮定した最終得点を1局面につき1つ伝播する。先手が最大化、
/// 後手が最小化する。
pub struct Minimax;

impl Outcome for Minimax {
    type Value = Score;

    // 2^24 = 16,777,216 で負荷率は約52%
    const TABLE_BITS: u32 = 24;

    #[inline]
    fn unresolved(board: Board) -> Score {
        Score::worst_for(board.side_to_move())
    }

    #[inline]
    fn leaf(board: Board) -> Score {
        board.score()
    }

    #[inline]
    fn combine(mover: Color, acc: Score, child: Score) -> Score {
        match mover {
            Color::First => acc.max(child),
            Color::Second => acc.min(child),
        }
    }

    #[inline]
    fn prefer(mover: Color, a: Score, b: Score) -> Ordering {
        match mover {
            Color::First => a.cmp(&b),
            Color::Second => b.cmp(&a),
        }
    }
}

/// 全数集計方式
///
/// 局面から到達可能なすべての終局プレイアウトの勝敗数を合算する。
/// 内部ノードは正準キーで重複排除するが、葉の計数は対称性で割らない。
/// 最善手の判定には使えない。
pub struct Tally;

/// 勝敗の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TallyCount {
    /// 先手勝ちの終局数
    pub first_wins: u64,
    /// 後手勝ちの終局数
    pub second_wins: u64,
    /// 引き分けの終局数
    pub ties: u64,
}

impl TallyCount {
    /// 総終局数
    #[inline]
    pub const fn total(self) -> u64 {
        self.first_wins + self.second_wins + self.ties
    }
}

impl Outcome for Tally {
    type Value = TallyCount;

    // 正準局面の集合はミニマックス方式と同一（スロットが大きいだけ）
    const TABLE_BITS: u32 = 24;

    #[inline]
    fn unresolved(_board: Board) -> TallyCount {
        TallyCount::default()
    }

    #[inline]
    fn leaf(board: Board) -> TallyCount {
        let score = board.score().raw();
        TallyCount {
            first_wins: (score > 0) as u64,
            second_wins: (score < 0) as u64,
            ties: (score == 0) as u64,
        }
    }

    #[inline]
    fn combine(_mover: Color, acc: TallyCount, child: TallyCount) -> TallyCount {
        TallyCount {
            first_wins: acc.first_wins + child.first_wins,
            second_wins: acc.second_wins + child.second_wins,
            ties: acc.ties + child.ties,
        }
    }

    #[inline]
    fn prefer(_mover: Color, _a: TallyCount, _b: TallyCount) -> Ordering {
        // 集計値に優劣はない。助言はすべての合法手を返す。
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_minimax_unresolved_is_combine_identity() {
        let first = Board::EMPTY;
        let second = Board::EMPTY.place(Square::new(0));
        for (board, child) in [(first, Score::new(3)), (second, Score::new(-4))] {
            let acc = Minimax::unresolved(board);
            assert_eq!(Minimax::combine(board.side_to_move(), acc, child), child);
        }
    }

    #[test]
    fn test_minimax_combine_alternates() {
        let a = Score::new(2);
        let b = Score::new(-1);
        assert_eq!(Minimax::combine(Color::First, a, b), a);
        assert_eq!(Minimax::combine(Color::Second, a, b), b);
    }

    #[test]
    fn test_minimax_prefer_is_mover_relative() {
        let better = Score::new(5);
        let worse = Score::new(1);
        assert_eq!(Minimax::prefer(Color::First, better, worse), Ordering::Greater);
        assert_eq!(Minimax::prefer(Color::Second, better, worse), Ordering::Less);
    }

    #[test]
    fn test_tally_leaf_classifies_by_sign() {
        let first_win = Board::EMPTY.place(Square::new(0));
        assert_eq!(Tally::leaf(first_win).first_wins, 1);
        assert_eq!(Tally::leaf(first_win).total(), 1);
        assert_eq!(Tally::leaf(Board::EMPTY).ties, 1);
    }

    #[test]
    fn test_tally_combine_sums() {
        let a = TallyCount { first_wins: 1, second_wins: 2, ties: 3 };
        let b = TallyCount { first_wins: 10, second_wins: 20, ties: 30 };
        let sum = Tally::combine(Color::First, a, b);
        assert_eq!(sum, TallyCount { first_wins: 11, second_wins: 22, ties: 33 });
        assert_eq!(sum.total(), 66);
    }
}
