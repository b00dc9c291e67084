//! Cell-by-cell search.

use super::{InsertionStrategy, Landing, accepts};
use crate::tableau::Tableau;

/// Scans from the start of the line until it meets an empty cell or a
/// larger content.
#[derive(Clone, Copy, Debug, Default)]
pub struct Linear;

impl InsertionStrategy for Linear {
    const NAME: &'static str = "linear";

    fn row_landing(tableau: &Tableau, y: usize, number: u64) -> Landing {
        let grid = tableau.grid();
        let mut x = 0;
        while !accepts(grid, x, y, number) {
            x += 1;
        }
        return Landing::in_row(tableau, x, y);
    }

    fn column_landing(tableau: &Tableau, x: usize, number: u64) -> Landing {
        let grid = tableau.grid();
        let mut y = 0;
        while !accepts(grid, x, y, number) {
            y += 1;
        }
        return Landing::in_column(tableau, x, y);
    }

    fn list_index(tableau: &Tableau, number: u64) -> usize {
        for i in 0..tableau.len() {
            if tableau.content_at_rank(i) > number {
                return i;
            }
        }
        return tableau.len();
    }
}
