//! 集計統計
//!
//! 全展開後のテーブルを走査する読み取り専用の統計。

use super::{Minimax, Solver};
use crate::types::Color;

/// 終局局面の勝敗内訳（正準局面単位）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Endings {
    /// 先手勝ちの終局局面数
    pub first_wins: u64,
    /// 後手勝ちの終局局面数
    pub second_wins: u64,
    /// 引き分けの終局局面数
    pub ties: u64,
}

impl Endings {
    /// 終局局面の総数
    #[inline]
    pub const fn total(self) -> u64 {
        self.first_wins + self.second_wins + self.ties
    }

    /// 指定プレイヤーの勝ち数
    #[inline]
    pub const fn wins(self, c: Color) -> u64 {
        match c {
            Color::First => self.first_wins,
            Color::Second => self.second_wins,
        }
    }
}

impl Solver<Minimax> {
    /// テーブル上の終局局面を得点符号で分類する
    ///
    /// 終局局面のスロット値は葉の得点そのものなので、符号がそのまま
    /// 勝敗を表す。マスクはエントリごとに再導出する。
    pub fn endings(&self) -> Endings {
        let mut endings = Endings::default();
        for (board, score) in self.entries() {
            let mask = board.derive_mask();
            if !board.is_complete(mask) {
                continue;
            }
            match score.raw() {
                s if s > 0 => endings.first_wins += 1,
                s if s < 0 => endings.second_wins += 1,
                _ => endings.ties += 1,
            }
        }
        endings
    }
}
