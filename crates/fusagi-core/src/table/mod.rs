//! 評価テーブルモジュール
//!
//! 正準局面ごとに評価結果を1つ保持する固定容量のオープンアドレス表。
//!
//! - 容量は2の冪で、到達可能な正準局面数を上回るように戦略側が選ぶ
//! - ハッシュは乗算＋xorシフト、探索は線形探査（折り返しあり）
//! - 空きスロットは明示的な列挙子で表す（ゼロ値の予約はしない）
//! - 容量超過は設定不備として致命的エラー。探索中の再ハッシュは行わない

use crate::board::Board;
use thiserror::Error;

/// 乗算ハッシュ定数（奇数）
const HASH_MUL: u64 = 0xcca1_cee4_35c5_048f;

/// テーブル操作のエラー
#[derive(Debug, Error)]
pub enum TableError {
    /// 容量不足。到達可能な正準局面数に対して容量定数が小さすぎる。
    #[error("evaluation table full: capacity {capacity} exceeded")]
    CapacityExceeded {
        /// テーブルの総容量
        capacity: usize,
    },
}

/// テーブルのスロット
#[derive(Debug, Clone, Copy)]
enum Slot<V> {
    Vacant,
    Occupied { key: Board, value: V },
}

/// 固定容量オープンアドレスの評価テーブル
///
/// キーは正準化済みの [`Board`] であること。等値判定は `Board` の完全一致。
pub struct EvalTable<V> {
    slots: Vec<Slot<V>>,
    len: usize,
}

impl<V: Copy> EvalTable<V> {
    /// 容量 `2^bits` のテーブルを確保する
    pub fn new(bits: u32) -> EvalTable<V> {
        EvalTable { slots: vec![Slot::Vacant; 1usize << bits], len: 0 }
    }

    /// 登録済みエントリ数
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// 空か
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 総容量
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn start_index(&self, key: Board) -> usize {
        let mut h = key.raw().wrapping_mul(HASH_MUL);
        h ^= h >> 40;
        h as usize & (self.slots.len() - 1)
    }

    /// キーに対応する値を検索する
    #[inline]
    pub fn get(&self, key: Board) -> Option<V> {
        let wrap = self.slots.len() - 1;
        let mut i = self.start_index(key);
        loop {
            match self.slots[i] {
                Slot::Vacant => return None,
                Slot::Occupied { key: k, value } if k == key => return Some(value),
                Slot::Occupied { .. } => i = (i + 1) & wrap,
            }
        }
    }

    /// 値を挿入する。既存キーなら上書きする。
    ///
    /// 負荷率が100%に達する挿入は [`TableError::CapacityExceeded`] を返す。
    /// 探査ループの停止のため、空きスロットは常に1つ以上残す。
    pub fn insert(&mut self, key: Board, value: V) -> Result<(), TableError> {
        let wrap = self.slots.len() - 1;
        let mut i = self.start_index(key);
        loop {
            match self.slots[i] {
                Slot::Vacant => {
                    if self.len + 1 >= self.slots.len() {
                        return Err(TableError::CapacityExceeded { capacity: self.slots.len() });
                    }
                    self.slots[i] = Slot::Occupied { key, value };
                    self.len += 1;
                    return Ok(());
                }
                Slot::Occupied { key: k, .. } if k == key => {
                    self.slots[i] = Slot::Occupied { key, value };
                    return Ok(());
                }
                Slot::Occupied { .. } => i = (i + 1) & wrap,
            }
        }
    }

    /// 登録済みの（キー, 値）を格納順不定で列挙する
    pub fn iter(&self) -> impl Iterator<Item = (Board, V)> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((*key, *value)),
            Slot::Vacant => None,
        })
    }
}
