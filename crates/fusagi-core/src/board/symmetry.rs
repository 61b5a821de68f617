//! 対称性の正準化
//!
//! 正方形の二面体群（位数8）は転置（主対角線反転）と上下反転の2つの
//! 生成元を交互に適用すれば全要素を巡回できる。各変換はプレーン内の
//! ビット置換であり、両プレーンに同一に作用し、手数フィールドには
//! 触れない。
//!
//! ビット置換は「シフト量ごとにまとめたマスク付きシフト」で実装する。
//! 行き先マスクはコンパイル時に構築する。

use super::{PLANE_BITS, TURN_SHIFT};
use crate::types::Square;

const SIDE: usize = Square::SIDE;

/// 転置のシフト量は 4*(x-y) で -16..=16 の9通り
const TRANSPOSE_SHIFTS: usize = 9;
/// 上下反転のシフト量は 5*(4-2y) で -20..=20 の5通り
const FLIP_SHIFTS: usize = 5;

/// 転置の行き先マスク。`masks[k]` はシフト量 `4*(k-4)` で埋まるビット。
const fn transpose_masks() -> [u64; TRANSPOSE_SHIFTS] {
    let mut masks = [0u64; TRANSPOSE_SHIFTS];
    let mut plane = 0;
    while plane < 2 {
        let mut y = 0;
        while y < SIDE {
            let mut x = 0;
            while x < SIDE {
                let src = plane * PLANE_BITS as usize + y * SIDE + x;
                let dst = plane * PLANE_BITS as usize + x * SIDE + y;
                let k = ((dst as i32 - src as i32) / 4 + 4) as usize;
                masks[k] |= 1u64 << dst;
                x += 1;
            }
            y += 1;
        }
        plane += 1;
    }
    // 手数フィールドはシフト0のグループで素通しする
    masks[4] |= !((1u64 << TURN_SHIFT) - 1);
    masks
}

/// 上下反転の行き先マスク。`masks[k]` はシフト量 `10*(k-2)` で埋まるビット。
const fn flip_masks() -> [u64; FLIP_SHIFTS] {
    let mut masks = [0u64; FLIP_SHIFTS];
    let mut plane = 0;
    while plane < 2 {
        let mut y = 0;
        while y < SIDE {
            let mut x = 0;
            while x < SIDE {
                let src = plane * PLANE_BITS as usize + y * SIDE + x;
                let dst = plane * PLANE_BITS as usize + (SIDE - 1 - y) * SIDE + x;
                let k = ((dst as i32 - src as i32) / 10 + 2) as usize;
                masks[k] |= 1u64 << dst;
                x += 1;
            }
            y += 1;
        }
        plane += 1;
    }
    masks[2] |= !((1u64 << TURN_SHIFT) - 1);
    masks
}

const TRANSPOSE: [u64; TRANSPOSE_SHIFTS] = transpose_masks();
const FLIP: [u64; FLIP_SHIFTS] = flip_masks();

/// 主対角線（0-6-12-18-24）での転置
#[inline]
pub(crate) const fn transpose_bits(b: u64) -> u64 {
    (b >> 16) & TRANSPOSE[0]
        | (b >> 12) & TRANSPOSE[1]
        | (b >> 8) & TRANSPOSE[2]
        | (b >> 4) & TRANSPOSE[3]
        | b & TRANSPOSE[4]
        | (b << 4) & TRANSPOSE[5]
        | (b << 8) & TRANSPOSE[6]
        | (b << 12) & TRANSPOSE[7]
        | (b << 16) & TRANSPOSE[8]
}

/// 水平中心線での上下反転
#[inline]
pub(crate) const fn flip_vertical_bits(b: u64) -> u64 {
    (b >> 20) & FLIP[0]
        | (b >> 10) & FLIP[1]
        | b & FLIP[2]
        | (b << 10) & FLIP[3]
        | (b << 20) & FLIP[4]
}

/// 8つの対称像のうち辞書順最小の値を返す
///
/// 転置と上下反転を交互に7回適用すると恒等を含む全8要素を巡回する。
pub(crate) const fn canonicalize_bits(b: u64) -> u64 {
    let mut best = b;
    let mut cur = b;
    let mut k = 0;
    while k < 7 {
        cur = if k % 2 == 0 { transpose_bits(cur) } else { flip_vertical_bits(cur) };
        if cur < best {
            best = cur;
        }
        k += 1;
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::Square;

    /// 1ビットずつ置換する素朴な参照実装
    fn permute_ref(b: u64, f: impl Fn(usize, usize) -> (usize, usize)) -> u64 {
        let mut out = b & !((1u64 << TURN_SHIFT) - 1);
        for plane in 0..2 {
            for y in 0..SIDE {
                for x in 0..SIDE {
                    let src = plane * PLANE_BITS as usize + y * SIDE + x;
                    let (nx, ny) = f(x, y);
                    let dst = plane * PLANE_BITS as usize + ny * SIDE + nx;
                    out |= (b >> src & 1) << dst;
                }
            }
        }
        out
    }

    fn sample_boards() -> Vec<Board> {
        let mut boards = vec![Board::EMPTY];
        let mut b = Board::EMPTY;
        for sq in [0usize, 24, 6, 13, 2, 21, 10, 19] {
            b = b.place(Square::new(sq));
            boards.push(b);
        }
        boards
    }

    #[test]
    fn test_transpose_matches_reference() {
        for b in sample_boards() {
            let expected = permute_ref(b.raw(), |x, y| (y, x));
            assert_eq!(transpose_bits(b.raw()), expected);
        }
    }

    #[test]
    fn test_flip_matches_reference() {
        for b in sample_boards() {
            let expected = permute_ref(b.raw(), |x, y| (x, SIDE - 1 - y));
            assert_eq!(flip_vertical_bits(b.raw()), expected);
        }
    }

    #[test]
    fn test_transforms_are_involutions() {
        for b in sample_boards() {
            assert_eq!(b.transpose().transpose(), b);
            assert_eq!(b.flip_vertical().flip_vertical(), b);
        }
    }

    #[test]
    fn test_transforms_preserve_turn() {
        for b in sample_boards() {
            assert_eq!(b.transpose().ply(), b.ply());
            assert_eq!(b.flip_vertical().ply(), b.ply());
        }
    }

    #[test]
    fn test_canonicalize_idempotent() {
        for b in sample_boards() {
            let c = b.canonicalize();
            assert_eq!(c.canonicalize(), c);
        }
    }

    #[test]
    fn test_canonicalize_constant_on_orbit() {
        for b in sample_boards() {
            let canonical = b.canonicalize();
            // 生成元を交互に適用して8つの対称像をすべて巡回する
            let mut image = b;
            for k in 0..8 {
                assert_eq!(image.canonicalize(), canonical);
                image = if k % 2 == 0 { image.transpose() } else { image.flip_vertical() };
            }
            assert_eq!(image, b); // 交互適用8回で恒等に戻る

        }
    }

    #[test]
    fn test_canonical_is_minimum_image() {
        for b in sample_boards() {
            let mut image = b;
            let mut min = b;
            for k in 0..7 {
                image = if k % 2 == 0 { image.transpose() } else { image.flip_vertical() };
                min = min.min(image);
            }
            assert_eq!(b.canonicalize(), min);
        }
    }
}
