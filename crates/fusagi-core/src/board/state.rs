//! ゲーム状態（Board）

use super::{Mask, PLANE_BITS, PLANE_MASK, STATE_MASK, TURN_SHIFT, symmetry};
use crate::types::{Color, Score, Square};

/// ゲーム状態のビットボード
///
/// 両者の占有プレーンと手数カウンタを1つの `u64` に保持する不変値。
/// 着手・パスは新しい `Board` を返す。着手合法性の判定には対になる
/// [`Mask`] が必要で、`place` は合法手チェック済みの升にのみ呼ぶこと。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Board(u64);

impl Board {
    /// 空盤面（手数1）
    pub const EMPTY: Board = Board(1 << TURN_SHIFT);

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

    /// 手番側の石を升 `sq` に置き、手数を進めた盤面を返す
    ///
    /// 占有済み・禁止升への適用は未定義（メモリ安全だが不正な盤面になる）。
    /// 呼び出し側が [`Mask::is_valid_move`] で事前に確認すること。
    #[inline]
    pub const fn place(self, sq: Square) -> Board {
        let turn = self.0 >> TURN_SHIFT;
        let state = self.0 & STATE_MASK;
        let bit = 1u64 << (self.side_to_move().plane_shift() + sq.index() as u32);
        Board((turn + 1) << TURN_SHIFT | state | bit)
    }

    /// 石を置かずに手数のみ進めた盤面を返す
    #[inline]
    pub const fn pass(self) -> Board {
        let turn = self.0 >> TURN_SHIFT;
        Board((turn + 1) << TURN_SHIFT | (self.0 & STATE_MASK))
    }

    /// 指定プレイヤーの占有プレーン（25bit）
    #[inline]
    pub const fn occupancy(self, c: Color) -> u32 {
        (self.0 >> c.plane_shift()) as u32 & PLANE_MASK
    }

    /// 最終得点（先手の石数 − 後手の石数）。終局時のみ意味を持つ。
    #[inline]
    pub const fn score(self) -> Score {
        let first = self.occupancy(Color::First).count_ones() as i32;
        let second = self.occupancy(Color::Second).count_ones() as i32;
        Score::new(first - second)
    }

    /// 指定プレイヤーにとって全升が「占有または禁止」か
    #[inline]
    const fn covered(self, c: Color, mask: Mask) -> bool {
        (self.occupancy(c) | mask.plane(c)) == PLANE_MASK
    }

    /// 手番側に合法手が1つもないか
    #[inline]
    pub const fn has_no_moves(self, mask: Mask) -> bool {
        self.covered(self.side_to_move(), mask)
    }

    /// 終局か（両者同時に合法手がない）
    #[inline]
    pub const fn is_complete(self, mask: Mask) -> bool {
        self.covered(Color::First, mask) && self.covered(Color::Second, mask)
    }

    /// 占有プレーンから整合する `Mask` を再構築する
    ///
    /// 「先手の石、後手の石を交互に1つずつ、尽きた側はパス」という固定順で
    /// 着手列を再生する。禁止制約は対称かつ単調（一度禁止された升は禁止の
    /// まま）なので、マスクは置かれた石の集合だけで決まり、実際の着手順に
    /// 依存しない。
    pub fn derive_mask(self) -> Mask {
        let mut count = [0usize; Color::NUM];
        let mut placed = [[0u8; Square::NUM]; Color::NUM];
        for i in 0..Square::NUM {
            if self.0 >> i & 1 == 1 {
                placed[0][count[0]] = i as u8;
                count[0] += 1;
            }
            if self.0 >> (i + PLANE_BITS as usize) & 1 == 1 {
                placed[1][count[1]] = i as u8;
                count[1] += 1;
            }
        }

        let mut mask = Mask::EMPTY;
        let mut k = 0usize;
        while mask.ply() < self.ply() {
            let side = k % 2;
            let nth = k / 2;
            mask = if nth < count[side] {
                mask.place(Square::new(placed[side][nth] as usize))
            } else {
                mask.pass()
            };
            k += 1;
        }
        mask
    }

    /// 主対角線（左上-右下）で反転した盤面
    #[inline]
    pub const fn transpose(self) -> Board {
        Board(symmetry::transpose_bits(self.0))
    }

    /// 水平中心線で上下反転した盤面
    #[inline]
    pub const fn flip_vertical(self) -> Board {
        Board(symmetry::flip_vertical_bits(self.0))
    }

    /// 8つの対称像のうち辞書順最小の盤面（正準形）
    #[inline]
    pub const fn canonicalize(self) -> Board {
        Board(symmetry::canonicalize_bits(self.0))
    }

    /// 生のビット表現（ハッシュ用）
    #[inline]
    pub(crate) const fn raw(self) -> u64 {
        self.0
    }
}
