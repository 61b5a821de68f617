//! fusagi-core: 5×5 ブロッキングゲームの完全解析エンジン
//!
//! 2人のプレイヤーが5×5盤に交互に石を置き、置いた石が相手の隣接着手を
//! 恒久的に禁止するゲームの全ゲーム木を、盤面対称性で縮約しながら
//! 展開・評価する。
//!
//! - `types`: 手番・升・得点・升集合などの基本型
//! - `board`: ビットボード表現（`Board` / `Mask`）と8方向対称の正準化
//! - `table`: 正準局面をキーとする固定容量オープンアドレス評価テーブル
//! - `solve`: メモ化探索エンジン（ミニマックス方式／全数集計方式）と着手助言

pub mod board;
pub mod solve;
pub mod table;
pub mod types;

pub use board::{Board, Mask};
pub use solve::{Endings, Minimax, Outcome, SolveError, Solver, Tally, TallyCount};
pub use table::{EvalTable, TableError};
pub use types::{Color, MoveSet, Score, Square};
