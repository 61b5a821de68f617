//! 盤面表現モジュール
//!
//! ゲーム状態全体を1つの `u64` に詰めたビットボードで表現する。
//!
//! ビットレイアウト（Board / Mask 共通）:
//!
//! ```text
//! XXXXXXXXTTTTTTBBBBBBBBBBBBBBBBBBBBBBBBBAAAAAAAAAAAAAAAAAAAAAAAAA
//! ```
//!
//! - bit 0..25: 先手プレーン（`Board` では占有、`Mask` では禁止）
//! - bit 25..50: 後手プレーン（同上）
//! - bit 50..: 1-indexed の手数カウンタ
//!
//! 値ゼロは「盤面なし」を意味する予約値であり、空盤面は手数1で表す。
//! すべての操作は値を返す純関数で、既存の値を書き換えない。
//!
//! - `Board`: 占有と手数からなる正味のゲーム状態
//! - `Mask`: 着手可否の事前計算キャッシュ。`Board` から再導出できる
//! - `symmetry`: 正方形の二面体群（8要素）による正準化

mod mask;
mod state;
mod symmetry;

pub use mask::Mask;
pub use state::Board;

/// 手数フィールドのシフト量
pub(crate) const TURN_SHIFT: u32 = 50;
/// 占有／禁止プレーン2枚分のマスク
pub(crate) const STATE_MASK: u64 = (1 << TURN_SHIFT) - 1;
/// プレーン1枚のビット数
pub(crate) const PLANE_BITS: u32 = 25;
/// プレーン1枚分のマスク
pub(crate) const PLANE_MASK: u32 = (1 << PLANE_BITS) - 1;
