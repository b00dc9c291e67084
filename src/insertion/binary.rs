//! Bisection over the known extent of a row or column.
//!
//! Along row 0 and column 0 contents never decrease, and a domino lying
//! along the line shows up as a run of two equal contents. The search finds
//! the first cell whose content exceeds the inserted number; because that
//! predicate is monotone, a run is always entered at its first cell and a
//! cell equal to the number is stepped over.

use log::trace;

use super::{InsertionStrategy, Landing, accepts};
use crate::grid::Grid;
use crate::tableau::Tableau;

#[derive(Clone, Copy, Debug, Default)]
pub struct Binary;

/// First index in `0..extent` where `accepted` holds, or `extent` when none does.
///
/// `accepted` must be false on a prefix of the range and true on the rest.
fn first_accepted(extent: usize, mut accepted: impl FnMut(usize) -> bool) -> usize {
    if extent == 0 {
        return 0;
    }
    // Cheap common case: the number belongs past everything already there.
    if !accepted(extent - 1) {
        return extent;
    }

    let mut lo = 0;
    let mut hi = extent - 1;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if accepted(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    return lo;
}

fn row_predicate(grid: &Grid, y: usize, number: u64) -> impl FnMut(usize) -> bool {
    return move |x| {
        let hit = accepts(grid, x, y, number);
        trace!("row {} check x={} content={:?} accepts={}", y, x, grid.get_content(x, y), hit);
        hit
    };
}

fn column_predicate(grid: &Grid, x: usize, number: u64) -> impl FnMut(usize) -> bool {
    return move |y| {
        let hit = accepts(grid, x, y, number);
        trace!("column {} check y={} content={:?} accepts={}", x, y, grid.get_content(x, y), hit);
        hit
    };
}

impl InsertionStrategy for Binary {
    const NAME: &'static str = "binary";

    fn row_landing(tableau: &Tableau, y: usize, number: u64) -> Landing {
        let grid = tableau.grid();
        let x = first_accepted(grid.row_length(y), row_predicate(grid, y, number));
        return Landing::in_row(tableau, x, y);
    }

    fn column_landing(tableau: &Tableau, x: usize, number: u64) -> Landing {
        let grid = tableau.grid();
        let y = first_accepted(grid.column_length(x), column_predicate(grid, x, number));
        return Landing::in_column(tableau, x, y);
    }

    fn list_index(tableau: &Tableau, number: u64) -> usize {
        return first_accepted(tableau.len(), |i| tableau.content_at_rank(i) > number);
    }
}
