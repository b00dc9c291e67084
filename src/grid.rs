//! Sparse cell index for a domino tableau.
//!
//! Maps each covered cell to the domino covering it and keeps, per row and
//! per column, one past the highest occupied coordinate. The extents stand
//! in for scanning to the end of a row or column.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::domino::{Cell, Domino, DominoId};

/// What a grid cell remembers about its occupant.
///
/// The content is cached next to the id so searches can compare values
/// without going back to the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub id: DominoId,
    pub content: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    cells: FxHashMap<Cell, Slot>,
    row_lengths: Vec<usize>,
    column_lengths: Vec<usize>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Grid {
        return Grid::default();
    }

    /// Record `slot` at `(x, y)` and widen the row and column extents.
    ///
    /// Returns the previous occupant if the cell was already covered.
    pub fn set(&mut self, x: usize, y: usize, slot: Slot) -> Option<Slot> {
        if self.row_lengths.len() <= y {
            self.row_lengths.resize(y + 1, 0);
        }
        if self.column_lengths.len() <= x {
            self.column_lengths.resize(x + 1, 0);
        }
        self.row_lengths[y] = self.row_lengths[y].max(x + 1);
        self.column_lengths[x] = self.column_lengths[x].max(y + 1);

        return self.cells.insert((x, y), slot);
    }

    /// The domino covering `(x, y)`, if any.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<DominoId> {
        return self.cells.get(&(x, y)).map(|slot| slot.id);
    }

    /// The content of the domino covering `(x, y)`, if any.
    #[inline]
    pub fn get_content(&self, x: usize, y: usize) -> Option<u64> {
        return self.cells.get(&(x, y)).map(|slot| slot.content);
    }

    /// Write `domino` into every cell of its footprint.
    ///
    /// Returns the distinct dominoes whose cells were taken over.
    pub fn add_domino(&mut self, id: DominoId, domino: &Domino) -> SmallVec<[DominoId; 2]> {
        let slot = Slot { id, content: domino.content };
        let mut replaced: SmallVec<[DominoId; 2]> = SmallVec::new();
        for (x, y) in domino.footprint() {
            if let Some(previous) = self.set(x, y, slot) {
                if previous.id != id && !replaced.contains(&previous.id) {
                    replaced.push(previous.id);
                }
            }
        }
        return replaced;
    }

    /// Length of row `i`, zero for a row never touched.
    #[inline]
    pub fn row_length(&self, i: usize) -> usize {
        return self.row_lengths.get(i).copied().unwrap_or(0);
    }

    /// Length of column `j`, zero for a column never touched.
    #[inline]
    pub fn column_length(&self, j: usize) -> usize {
        return self.column_lengths.get(j).copied().unwrap_or(0);
    }

    pub fn row_lengths(&self) -> &[usize] {
        return &self.row_lengths;
    }

    pub fn column_lengths(&self) -> &[usize] {
        return &self.column_lengths;
    }

    /// Number of covered cells.
    pub fn len(&self) -> usize {
        return self.cells.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.cells.is_empty();
    }

    /// Iterate covered cells and their occupants, in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, DominoId)> + '_ {
        return self.cells.iter().map(|(&cell, slot)| (cell, slot.id));
    }
}
