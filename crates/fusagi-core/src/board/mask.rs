//! 合法手マスク（Mask）

use super::{PLANE_MASK, STATE_MASK, TURN_SHIFT};
use crate::types::{Color, MoveSet, Square};

/// 升 `i` に石を置いたとき相手に禁止される升の集合（その升と上下左右）
const fn block_bits(i: usize) -> u32 {
    let x = i % Square::SIDE;
    let y = i / Square::SIDE;
    let mut bits = 1u32 << i;
    if x > 0 {
        bits |= 1 << (i - 1);
    }
    if x < Square::SIDE - 1 {
        bits |= 1 << (i + 1);
    }
    if y > 0 {
        bits |= 1 << (i - Square::SIDE);
    }
    if y < Square::SIDE - 1 {
        bits |= 1 << (i + Square::SIDE);
    }
    bits
}

const fn build_blocks() -> [u32; Square::NUM] {
    let mut table = [0u32; Square::NUM];
    let mut i = 0;
    while i < Square::NUM {
        table[i] = block_bits(i);
        i += 1;
    }
    table
}

/// 升ごとの禁止マスクテーブル
const BLOCKS: [u32; Square::NUM] = build_blocks();

/// 着手可否の事前計算キャッシュ
///
/// [`Board`](super::Board) と同じビットレイアウトで、プレーンのビットは
/// 「そのプレイヤーにとって禁止された升」（占有升を含む）を表す。
/// 対になる `Board` から [`derive_mask`](super::Board::derive_mask) で
/// 再導出できる情報しか持たず、毎回の再計算を避けるためだけに存在する。
/// `Board` と並走させ、手数は常に一致させること。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Mask(u64);

impl Mask {
    /// 空盤面のマスク（手数1）
    pub const EMPTY: Mask = Mask(1 << TURN_SHIFT);

    /// 0-indexed の手数を返す
    #[inline]
    pub const fn ply(self) -> u32 {
        (self.0 >> TURN_SHIFT) as u32 - 1
    }

    /// 手番を返す
    #[inline]
    pub const fn side_to_move(self) -> Color {
        if self.ply() % 2 == 0 { Color::First } else { Color::Second }
    }

    /// 手番側が升 `sq` に石を置いた後のマスクを返す
    ///
    /// 着手升とその上下左右を相手の禁止プレーンに、着手升を自分の
    /// 禁止プレーンに加える。禁止は単調で、解除されることはない。
    #[inline]
    pub const fn place(self, sq: Square) -> Mask {
        let who = self.side_to_move();
        let turn = self.0 >> TURN_SHIFT;
        let state = self.0 & STATE_MASK;
        let blocked = (BLOCKS[sq.index()] as u64) << who.opponent().plane_shift();
        let own = 1u64 << (who.plane_shift() + sq.index() as u32);
        Mask((turn + 1) << TURN_SHIFT | state | blocked | own)
    }

    /// 石を置かずに手数のみ進めたマスクを返す
    #[inline]
    pub const fn pass(self) -> Mask {
        let turn = self.0 >> TURN_SHIFT;
        Mask((turn + 1) << TURN_SHIFT | (self.0 & STATE_MASK))
    }

    /// 手番側が升 `sq` に着手できるか
    ///
    /// 初手のみ特別規則で中央の升が禁止される。それ以外は手番側の
    /// 禁止ビットが立っていなければ合法。
    #[inline]
    pub const fn is_valid_move(self, sq: Square) -> bool {
        if self.ply() == 0 {
            return sq.index() != Square::CENTER.index();
        }
        self.0 >> (self.side_to_move().plane_shift() + sq.index() as u32) & 1 == 0
    }

    /// 指定プレイヤーの禁止プレーン（25bit）
    #[inline]
    pub(crate) const fn plane(self, c: Color) -> u32 {
        (self.0 >> c.plane_shift()) as u32 & PLANE_MASK
    }

    /// 指定プレイヤーにとって禁止された升の集合
    #[inline]
    pub const fn forbidden(self, c: Color) -> MoveSet {
        MoveSet::from_bits(self.plane(c))
    }
}
