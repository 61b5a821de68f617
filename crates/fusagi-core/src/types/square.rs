//! 升（Square）

/// 5×5盤の升。行優先で 0..25 を取る。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升の数
    pub const NUM: usize = 25;
    /// 盤の一辺
    pub const SIDE: usize = 5;
    /// 中央の升。初手でのみ着手が禁止される。
    pub const CENTER: Square = Square(12);

    /// インデックスから生成
    #[inline]
    pub const fn new(index: usize) -> Square {
        debug_assert!(index < Self::NUM);
        Square(index as u8)
    }

    /// 筋と段から生成
    #[inline]
    pub const fn from_xy(x: usize, y: usize) -> Square {
        debug_assert!(x < Self::SIDE && y < Self::SIDE);
        Square((y * Self::SIDE + x) as u8)
    }

    /// 行優先インデックス
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 筋（列、0..5）
    #[inline]
    pub const fn x(self) -> usize {
        self.0 as usize % Self::SIDE
    }

    /// 段（行、0..5）
    #[inline]
    pub const fn y(self) -> usize {
        self.0 as usize / Self::SIDE
    }

    /// 全升を行優先で列挙する
    #[inline]
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM).map(Square::new)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 人間向けには 1-25 で表示する
        write!(f, "{}", self.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_center() {
        assert_eq!(Square::CENTER, Square::from_xy(2, 2));
        assert_eq!(Square::CENTER.index(), 12);
    }

    #[test]
    fn test_square_xy_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::from_xy(sq.x(), sq.y()), sq);
        }
    }

    #[test]
    fn test_square_all_count() {
        assert_eq!(Square::all().count(), Square::NUM);
    }

    #[test]
    fn test_square_display_one_indexed() {
        assert_eq!(Square::new(0).to_string(), "1");
        assert_eq!(Square::new(24).to_string(), "25");
    }
}
