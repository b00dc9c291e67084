//! Dominoes: the tiles of a domino tableau.

use smallvec::{SmallVec, smallvec};

/// A grid coordinate `(x, y)`, zero-based, x grows right and y grows down.
pub type Cell = (usize, usize);

/// Index of a domino in its tableau's arena.
///
/// Ids are handed out in placement order and never reused, so a grid cell
/// can refer to a domino without owning it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DominoId(pub u32);

impl DominoId {
    #[inline]
    pub fn index(self) -> usize {
        return self.0 as usize;
    }
}

/// The footprint kind of a placed tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DominoShape {
    /// 1x2, covering the anchor and the cell to its right.
    Horizontal,
    /// 2x1, covering the anchor and the cell below it.
    Vertical,
    /// 2x2 box anchored at its top-left cell.
    Box,
    /// The fixed 1x1 square holding 0 in the corner of every tableau.
    ZeroSquare,
}

/// One placed tile.
///
/// `content` is the absolute value that was inserted; the zero square
/// carries 0, which sorts before every inserted value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Domino {
    pub content: u64,
    /// Column of the left-most covered cell.
    pub x: usize,
    /// Row of the highest covered cell.
    pub y: usize,
    pub shape: DominoShape,
}

impl Domino {
    pub fn horizontal(content: u64, x: usize, y: usize) -> Domino {
        return Domino { content, x, y, shape: DominoShape::Horizontal };
    }

    pub fn vertical(content: u64, x: usize, y: usize) -> Domino {
        return Domino { content, x, y, shape: DominoShape::Vertical };
    }

    /// A domino whose orientation is given as a flag.
    pub fn oriented(content: u64, x: usize, y: usize, horizontal: bool) -> Domino {
        if horizontal {
            return Domino::horizontal(content, x, y);
        }
        return Domino::vertical(content, x, y);
    }

    /// A 2x2 box.
    pub fn boxed(content: u64, x: usize, y: usize) -> Domino {
        return Domino { content, x, y, shape: DominoShape::Box };
    }

    /// The zero square: content 0 at (0, 0).
    pub fn zero() -> Domino {
        return Domino { content: 0, x: 0, y: 0, shape: DominoShape::ZeroSquare };
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        return self.shape == DominoShape::Horizontal;
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        return self.shape == DominoShape::Vertical;
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        return self.shape == DominoShape::ZeroSquare;
    }

    /// The anchor cell.
    #[inline]
    pub fn anchor(&self) -> Cell {
        return (self.x, self.y);
    }

    /// Every cell this tile covers, anchor first.
    pub fn footprint(&self) -> SmallVec<[Cell; 4]> {
        let (x, y) = (self.x, self.y);
        return match self.shape {
            DominoShape::ZeroSquare => smallvec![(x, y)],
            DominoShape::Horizontal => smallvec![(x, y), (x + 1, y)],
            DominoShape::Vertical => smallvec![(x, y), (x, y + 1)],
            DominoShape::Box => smallvec![(x, y), (x, y + 1), (x + 1, y), (x + 1, y + 1)],
        };
    }

    /// Copy an ordered list of dominoes.
    pub fn clone_list(list: &[Domino]) -> Vec<Domino> {
        return list.to_vec();
    }
}
