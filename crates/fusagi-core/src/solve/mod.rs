//! 探索エンジンモジュール
//!
//! ゲーム木を対称性で縮約しながら再帰的に全展開するメモ化探索。
//!
//! - 局面は正準形をキーに [`EvalTable`] へメモ化する。確定済みスロットへの
//!   ヒットが指数的なプレイアウトを約866万の正準局面グラフに縮める
//! - 集約は [`Outcome`] 戦略（ミニマックス方式／全数集計方式）に委ねる
//! - 単一スレッドの同期的な深さ優先再帰。再帰深度は手数カウンタで抑えられる
//! - テーブルへの書き込みは初回の全展開中のみで、以後の照会は純粋な読み取り

mod outcome;
mod stats;

pub use outcome::{Minimax, Outcome, Tally, TallyCount};
pub use stats::Endings;

use crate::board::{Board, Mask};
use crate::table::{EvalTable, TableError};
use crate::types::{MoveSet, Square};
use std::cmp::Ordering;
use thiserror::Error;

/// 探索のエラー
#[derive(Debug, Error)]
pub enum SolveError {
    /// 評価テーブルの容量不足（致命的な設定不備）
    #[error(transparent)]
    Table(#[from] TableError),
}

/// メモ化探索エンジン
///
/// 戦略 `O` ごとに単相化され、評価テーブルを1つ所有する。
pub struct Solver<O: Outcome> {
    table: EvalTable<O::Value>,
}

impl<O: Outcome> Solver<O> {
    /// 戦略の容量定数でテーブルを確保する
    pub fn new() -> Solver<O> {
        Solver::with_table_bits(O::TABLE_BITS)
    }

    /// 容量 `2^bits` のテーブルで確保する
    ///
    /// 全展開には [`Outcome::TABLE_BITS`] が必要。部分木しか評価しない
    /// 用途（テストや対話セッションの検証）では小さくできる。
    pub fn with_table_bits(bits: u32) -> Solver<O> {
        Solver { table: EvalTable::new(bits) }
    }

    /// 局面を評価する
    ///
    /// 子孫をすべて確定させてから集約値を返す。同一正準局面の再訪は
    /// テーブルヒットで即座に返る。`mask` は `board` と同じ手数の
    /// 整合したマスクであること。
    pub fn evaluate(&mut self, board: Board, mask: Mask) -> Result<O::Value, SolveError> {
        debug_assert_eq!(board.ply(), mask.ply());
        let canonical = board.canonicalize();
        if let Some(value) = self.table.get(canonical) {
            return Ok(value);
        }
        // スロットを未確定値で先に確保し、容量超過をここで検出する。
        // 手数が単調増加するため探索グラフは非巡回で、未確定スロットが
        // 確定前に再訪されることはない。
        self.table.insert(canonical, O::unresolved(canonical))?;

        let value = if board.is_complete(mask) {
            O::leaf(canonical)
        } else if board.has_no_moves(mask) {
            // 手番側は強制パス
            self.evaluate(board.pass(), mask.pass())?
        } else {
            let mover = board.side_to_move();
            let mut acc = O::unresolved(canonical);
            for sq in Square::all() {
                if mask.is_valid_move(sq) {
                    let child = self.evaluate(board.place(sq), mask.place(sq))?;
                    acc = O::combine(mover, acc, child);
                }
            }
            acc
        };

        self.table.insert(canonical, value)?;
        Ok(value)
    }

    /// 初期局面から全ゲーム木を展開し、ルートの集約値を返す
    pub fn solve(&mut self) -> Result<O::Value, SolveError> {
        let value = self.evaluate(Board::EMPTY, Mask::EMPTY)?;
        log::debug!(
            "exploration complete: {} canonical states ({}% load)",
            self.table.len(),
            self.table.len() * 100 / self.table.capacity()
        );
        Ok(value)
    }

    /// 手番側にとって最善の着手の集合を返す
    ///
    /// 各合法手の子を評価し、戦略の `prefer` で最良タイの全員を残す。
    /// 返る升はどれを選んでも完全対局と同一の結末を強制する。
    /// 合法手がない場合のみ空集合（呼び出し側はパスする）。
    pub fn suggest(&mut self, board: Board, mask: Mask) -> Result<MoveSet, SolveError> {
        let mover = board.side_to_move();
        let mut best: Option<O::Value> = None;
        let mut moves = MoveSet::EMPTY;
        for sq in Square::all() {
            if !mask.is_valid_move(sq) {
                continue;
            }
            let value = self.evaluate(board.place(sq), mask.place(sq))?;
            match best {
                None => {
                    best = Some(value);
                    moves.insert(sq);
                }
                Some(incumbent) => match O::prefer(mover, value, incumbent) {
                    Ordering::Greater => {
                        best = Some(value);
                        moves = MoveSet::EMPTY;
                        moves.insert(sq);
                    }
                    Ordering::Equal => moves.insert(sq),
                    Ordering::Less => {}
                },
            }
        }
        Ok(moves)
    }

    /// 確定済みの正準局面数
    #[inline]
    pub fn states(&self) -> usize {
        self.table.len()
    }

    /// 確定済みの（正準局面, 集約値）を列挙する
    pub fn entries(&self) -> impl Iterator<Item = (Board, O::Value)> + '_ {
        self.table.iter()
    }
}

impl<O: Outcome> Default for Solver<O> {
    fn default() -> Solver<O> {
        Solver::new()
    }
}
