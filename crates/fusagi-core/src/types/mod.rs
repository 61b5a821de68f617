//! 基本型モジュール
//!
//! - `Color`: 手番（先手/後手）
//! - `Square`: 盤上の升（行優先 0..25）
//! - `Score`: 最終得点（先手の石数 − 後手の石数）
//! - `MoveSet`: 升の集合（25bitビットセット）

mod color;
mod move_set;
mod score;
mod square;

pub use color::Color;
pub use move_set::{MoveSet, MoveSetIter};
pub use score::Score;
pub use square::Square;
