//! 升集合（MoveSet）

use super::Square;

/// 升の集合（25bitビットセット）
///
/// 着手助言の結果や禁止升プレーンの表現に使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct MoveSet(u32);

impl MoveSet {
    /// 空集合
    pub const EMPTY: MoveSet = MoveSet(0);

    /// 25bit値から生成（上位ビットは無視する）
    #[inline]
    pub const fn from_bits(bits: u32) -> MoveSet {
        MoveSet(bits & ((1 << Square::NUM) - 1))
    }

    /// 生のビット表現
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// 升を追加する
    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1 << sq.index();
    }

    /// 升が含まれるか
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 >> sq.index() & 1 == 1
    }

    /// 要素数
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// 空集合か
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `other` の部分集合か
    #[inline]
    pub const fn is_subset_of(self, other: MoveSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// 昇順に升を列挙する
    #[inline]
    pub fn iter(self) -> MoveSetIter {
        MoveSetIter(self.0)
    }
}

impl IntoIterator for MoveSet {
    type Item = Square;
    type IntoIter = MoveSetIter;

    #[inline]
    fn into_iter(self) -> MoveSetIter {
        self.iter()
    }
}

/// `MoveSet` のイテレータ
#[derive(Debug, Clone)]
pub struct MoveSetIter(u32);

impl Iterator for MoveSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let i = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(Square::new(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for MoveSetIter {}
