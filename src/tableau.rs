//! Domino tableaux and the single insertion step.
//!
//! A tableau owns its dominoes in an arena indexed by [`DominoId`], keeps
//! the ids sorted by content, and indexes covered cells in a [`Grid`].
//! Every cell refers to a domino by id, so a domino spanning two or four
//! cells is stored once.
//!
//! A bump (landing on an occupied cell) writes the new domino over the
//! occupant's cells. The occupant stays in the list but no longer appears
//! in the grid; it is reported by [`Tableau::displaced`].

use std::cmp::Reverse;

use log::debug;

use crate::domino::{Domino, DominoId, DominoShape};
use crate::grid::Grid;
use crate::insertion::{Binary, InsertionStrategy, Linear, Placement, Strategy};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tableau {
    /// Dominoes in placement order; `DominoId(i)` is `arena[i]`.
    arena: Vec<Domino>,
    /// Ids sorted by content, ascending.
    order: Vec<DominoId>,
    /// For each arena entry, the later domino that took over its cells.
    displaced_by: Vec<Option<DominoId>>,
    grid: Grid,
}

impl Default for Tableau {
    fn default() -> Self {
        return Self::new();
    }
}

impl Tableau {
    /// A tableau holding only the zero square.
    pub fn new() -> Tableau {
        return Tableau::from_dominoes(vec![Domino::zero()]);
    }

    /// Build a tableau from a content-ordered list of dominoes.
    ///
    /// No zero square is implied; pass [`Domino::zero`] first if one is
    /// wanted. Ids follow list positions. Where dominoes overlap, the one
    /// with the smaller content covers the cell and the others are
    /// displaced, which is how a bump leaves the grid.
    pub fn from_dominoes(dominoes: Vec<Domino>) -> Tableau {
        let mut tableau = Tableau {
            arena: Vec::with_capacity(dominoes.len()),
            order: Vec::with_capacity(dominoes.len()),
            displaced_by: Vec::with_capacity(dominoes.len()),
            grid: Grid::new(),
        };
        for domino in dominoes {
            let id = tableau.next_id();
            tableau.arena.push(domino);
            tableau.displaced_by.push(None);
            tableau.order.push(id);
        }

        // Largest content first, so the smallest in each overlap ends on top.
        let mut covering = tableau.order.clone();
        covering.sort_by_key(|id| Reverse(tableau.arena[id.index()].content));
        for id in covering {
            tableau.cover(id);
        }
        return tableau;
    }

    /// Add a domino, finding its list position by scanning.
    pub fn insert(&mut self, domino: Domino) -> DominoId {
        return self.insert_with::<Linear>(domino);
    }

    /// Add a domino, finding its list position by bisection.
    ///
    /// Same result as [`insert`](Self::insert).
    pub fn insert_binary(&mut self, domino: Domino) -> DominoId {
        return self.insert_with::<Binary>(domino);
    }

    pub fn insert_with<S: InsertionStrategy>(&mut self, domino: Domino) -> DominoId {
        let index = S::list_index(self, domino.content);
        return self.place(index, domino);
    }

    fn next_id(&self) -> DominoId {
        let index = u32::try_from(self.arena.len()).expect("domino arena overflow");
        return DominoId(index);
    }

    fn place(&mut self, index: usize, domino: Domino) -> DominoId {
        let id = self.next_id();
        self.arena.push(domino);
        self.displaced_by.push(None);
        self.order.insert(index, id);
        self.cover(id);
        return id;
    }

    /// Write `id` into the grid, marking whatever it covers as displaced.
    fn cover(&mut self, id: DominoId) {
        let domino = self.arena[id.index()];
        for old in self.grid.add_domino(id, &domino) {
            self.displaced_by[old.index()] = Some(id);
        }
    }

    /// Insert one signed value with the Domino Robinson-Schensted step,
    /// scanning row 0 or column 0 linearly.
    pub fn next_robinson_schensted(&mut self, value: i64) -> Placement {
        return self.step_with::<Linear>(value);
    }

    /// As [`next_robinson_schensted`](Self::next_robinson_schensted), using
    /// bisection for both the grid search and the list position.
    pub fn next_robinson_schensted_binary(&mut self, value: i64) -> Placement {
        return self.step_with::<Binary>(value);
    }

    /// Insert one signed value with a strategy chosen at runtime.
    pub fn step(&mut self, value: i64, strategy: Strategy) -> Placement {
        return match strategy {
            Strategy::Linear => self.step_with::<Linear>(value),
            Strategy::Binary => self.step_with::<Binary>(value),
        };
    }

    /// Insert one signed value: positive values land in row 0 as horizontal
    /// dominoes, negative ones in column 0 as vertical dominoes.
    pub fn step_with<S: InsertionStrategy>(&mut self, value: i64) -> Placement {
        debug_assert_ne!(value, 0, "zero is not a signed value");

        let landing = S::landing(self, value);
        let placement = landing.placement;
        let domino = Domino::oriented(
            value.unsigned_abs(),
            placement.x,
            placement.y,
            placement.horizontal,
        );
        let id = self.insert_with::<S>(domino);

        debug!(
            "{} step: value={} id={} at ({}, {}) horizontal={} bumped={:?} next={:?}",
            S::NAME,
            value,
            id.0,
            placement.x,
            placement.y,
            placement.horizontal,
            landing.occupant.map(|o| self.arena[o.index()].content),
            landing.neighbour.map(|o| self.arena[o.index()].content),
        );
        return placement;
    }

    /// Number of dominoes, zero square and displaced dominoes included.
    pub fn len(&self) -> usize {
        return self.order.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.order.is_empty();
    }

    /// Dominoes in ascending content order.
    pub fn dominoes(&self) -> impl Iterator<Item = &Domino> + '_ {
        return self.order.iter().map(|id| &self.arena[id.index()]);
    }

    pub fn domino(&self, id: DominoId) -> Option<&Domino> {
        return self.arena.get(id.index());
    }

    /// Content of the `rank`-th domino in content order.
    ///
    /// Panics if `rank` is out of range.
    #[inline]
    pub fn content_at_rank(&self, rank: usize) -> u64 {
        return self.arena[self.order[rank].index()].content;
    }

    pub(crate) fn is_horizontal(&self, id: DominoId) -> bool {
        return self.arena[id.index()].is_horizontal();
    }

    pub(crate) fn is_vertical(&self, id: DominoId) -> bool {
        return self.arena[id.index()].is_vertical();
    }

    /// The domino covering `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Option<&Domino> {
        return self.grid.get(x, y).map(|id| &self.arena[id.index()]);
    }

    pub fn get_content(&self, x: usize, y: usize) -> Option<u64> {
        return self.grid.get_content(x, y);
    }

    pub fn grid(&self) -> &Grid {
        return &self.grid;
    }

    pub fn row_length(&self, i: usize) -> usize {
        return self.grid.row_length(i);
    }

    pub fn column_length(&self, j: usize) -> usize {
        return self.grid.column_length(j);
    }

    pub fn row_lengths(&self) -> &[usize] {
        return self.grid.row_lengths();
    }

    pub fn column_lengths(&self) -> &[usize] {
        return self.grid.column_lengths();
    }

    /// Whether a later bump took over this domino's cells.
    pub fn is_displaced(&self, id: DominoId) -> bool {
        return matches!(self.displaced_by.get(id.index()), Some(Some(_)));
    }

    /// The domino that took over `id`'s cells, if any.
    pub fn displaced_by(&self, id: DominoId) -> Option<DominoId> {
        return self.displaced_by.get(id.index()).copied().flatten();
    }

    /// Displaced dominoes in content order.
    pub fn displaced(&self) -> impl Iterator<Item = DominoId> + '_ {
        return self.order.iter().copied().filter(|&id| self.is_displaced(id));
    }

    /// Dominoes still present in the grid, in content order.
    pub fn live(&self) -> impl Iterator<Item = (DominoId, &Domino)> + '_ {
        return self
            .order
            .iter()
            .copied()
            .filter(|&id| !self.is_displaced(id))
            .map(|id| (id, &self.arena[id.index()]));
    }

    /// Number of vertical dominoes, displaced ones included.
    pub fn vertical_domino_count(&self) -> usize {
        return self.arena.iter().filter(|d| d.shape == DominoShape::Vertical).count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_holds_only_the_zero_square() {
        let tableau = Tableau::new();
        assert_eq!(tableau.len(), 1);
        assert_eq!(tableau.dominoes().next(), Some(&Domino::zero()));
        assert_eq!(tableau.row_lengths(), &[1]);
        assert_eq!(tableau.column_lengths(), &[1]);
        assert_eq!(tableau.row_length(1), 0);
    }

    #[test]
    fn insert_keeps_content_order() {
        let mut linear = Tableau::new();
        let mut binary = Tableau::new();
        let dominoes = [
            Domino::horizontal(4, 1, 0),
            Domino::vertical(2, 0, 1),
            Domino::horizontal(9, 3, 0),
            Domino::vertical(6, 0, 3),
            Domino::horizontal(1, 5, 0),
        ];
        for domino in dominoes {
            linear.insert(domino);
            binary.insert_binary(domino);
        }

        let contents: Vec<u64> = linear.dominoes().map(|d| d.content).collect();
        assert_eq!(contents, vec![0, 1, 2, 4, 6, 9]);
        assert_eq!(linear, binary);
    }

    #[test]
    fn positive_values_grow_row_zero() {
        let mut tableau = Tableau::new();
        assert_eq!(tableau.next_robinson_schensted(1), Placement { x: 1, y: 0, horizontal: true });
        assert_eq!(tableau.next_robinson_schensted(3), Placement { x: 3, y: 0, horizontal: true });
        assert_eq!(tableau.row_lengths(), &[5]);
        assert_eq!(tableau.column_lengths(), &[1, 1, 1, 1, 1]);
    }

    #[test]
    fn negative_values_grow_column_zero() {
        let mut tableau = Tableau::new();
        assert_eq!(
            tableau.next_robinson_schensted_binary(-2),
            Placement { x: 0, y: 1, horizontal: false }
        );
        assert_eq!(
            tableau.next_robinson_schensted_binary(-5),
            Placement { x: 0, y: 3, horizontal: false }
        );
        assert_eq!(tableau.column_lengths(), &[5]);
        assert_eq!(tableau.row_lengths(), &[1, 1, 1, 1, 1]);
        assert_eq!(tableau.vertical_domino_count(), 2);
    }

    #[test]
    fn bump_displaces_the_occupant() {
        let mut tableau = Tableau::new();
        tableau.step(5, Strategy::Linear);
        let placement = tableau.step(2, Strategy::Linear);
        assert_eq!(placement, Placement { x: 1, y: 0, horizontal: true });

        assert_eq!(tableau.len(), 3);
        assert_eq!(tableau.get_content(1, 0), Some(2));
        assert_eq!(tableau.get_content(2, 0), Some(2));
        assert_eq!(tableau.row_length(0), 3);

        let displaced: Vec<DominoId> = tableau.displaced().collect();
        assert_eq!(displaced, vec![DominoId(1)]);
        assert_eq!(tableau.displaced_by(DominoId(1)), Some(DominoId(2)));
        assert_eq!(tableau.live().count(), 2);
    }

    #[test]
    fn clone_is_deep() {
        let mut tableau = Tableau::new();
        tableau.step(1, Strategy::Binary);
        let snapshot = tableau.clone();
        tableau.step(-2, Strategy::Binary);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(tableau.len(), 3);
        assert_ne!(snapshot, tableau);
    }

    #[test]
    fn from_dominoes_rebuilds_the_grid() {
        let tableau = Tableau::from_dominoes(vec![
            Domino::zero(),
            Domino::boxed(3, 1, 0),
        ]);
        assert_eq!(tableau.get(2, 1).map(|d| d.content), Some(3));
        assert_eq!(tableau.row_lengths(), &[3, 3]);
        assert_eq!(tableau.column_lengths(), &[1, 2, 2]);
    }

    #[test]
    fn from_dominoes_keeps_the_smaller_of_overlapping_dominoes() {
        // Row 0 after inserting 3 then 1: the 1 sits on top of the 3.
        let tableau = Tableau::from_dominoes(vec![
            Domino::zero(),
            Domino::horizontal(1, 1, 0),
            Domino::horizontal(3, 1, 0),
        ]);
        assert_eq!(tableau.get_content(1, 0), Some(1));
        assert_eq!(tableau.get_content(2, 0), Some(1));
        assert_eq!(tableau.displaced().collect::<Vec<_>>(), vec![DominoId(2)]);
        assert_eq!(tableau.displaced_by(DominoId(2)), Some(DominoId(1)));
        assert_eq!(tableau.live().count(), 2);
    }
}
