//! The domino bumping-insertion search, behind one interface.
//!
//! An [`InsertionStrategy`] answers two questions for a tableau: where along
//! a row or column a new value lands, and where in the content-sorted list
//! the new domino goes. [`Linear`] scans, [`Binary`] bisects using the
//! grid's row and column extents. Both must give identical answers for every
//! tableau; the equivalence tests compare them step by step.
//!
//! Only row 0 (positive values) and column 0 (negative values) are searched.
//! The landing records the occupant that would be bumped and its neighbour
//! along the search line, but the bump is not chained into later rows or
//! columns.

use std::fmt;
use std::str::FromStr;

use crate::domino::DominoId;
use crate::error::DrsError;
use crate::grid::Grid;
use crate::tableau::Tableau;

mod binary;
mod linear;

pub use binary::Binary;
pub use linear::Linear;

/// Where a new domino goes and which way it lies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub horizontal: bool,
}

/// The result of searching one row or column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Landing {
    pub placement: Placement,
    /// The domino found at the landing cell, `None` when appending.
    pub occupant: Option<DominoId>,
    /// The domino that would carry the bump onwards: the occupant itself
    /// when it lies along the search line, otherwise the one next to it.
    pub neighbour: Option<DominoId>,
}

impl Landing {
    /// Landing on an empty cell past the end of the line.
    pub fn append(x: usize, y: usize, horizontal: bool) -> Landing {
        return Landing {
            placement: Placement { x, y, horizontal },
            occupant: None,
            neighbour: None,
        };
    }

    /// Landing on `(x, y)` while scanning row `y`.
    pub(crate) fn in_row(tableau: &Tableau, x: usize, y: usize) -> Landing {
        let grid = tableau.grid();
        let occupant = grid.get(x, y);
        let neighbour = match occupant {
            None => None,
            Some(id) if tableau.is_horizontal(id) => Some(id),
            Some(_) => grid.get(x + 1, y),
        };
        return Landing {
            placement: Placement { x, y, horizontal: true },
            occupant,
            neighbour,
        };
    }

    /// Landing on `(x, y)` while scanning column `x`.
    pub(crate) fn in_column(tableau: &Tableau, x: usize, y: usize) -> Landing {
        let grid = tableau.grid();
        let occupant = grid.get(x, y);
        let neighbour = match occupant {
            None => None,
            Some(id) if tableau.is_vertical(id) => Some(id),
            Some(_) => grid.get(x, y + 1),
        };
        return Landing {
            placement: Placement { x, y, horizontal: false },
            occupant,
            neighbour,
        };
    }
}

/// True when `(x, y)` is an insertion point for `number`: empty, or holding
/// a larger content.
#[inline]
pub(crate) fn accepts(grid: &Grid, x: usize, y: usize, number: u64) -> bool {
    return match grid.get_content(x, y) {
        None => true,
        Some(content) => content > number,
    };
}

/// One way of running the domino insertion search.
pub trait InsertionStrategy {
    /// Name used in logs and on the command line.
    const NAME: &'static str;

    /// Find where `number` lands in row `y`, scanning increasing x.
    fn row_landing(tableau: &Tableau, y: usize, number: u64) -> Landing;

    /// Find where `number` lands in column `x`, scanning increasing y.
    fn column_landing(tableau: &Tableau, x: usize, number: u64) -> Landing;

    /// Position in the content-sorted domino list before which a domino
    /// holding `number` goes: the first entry with greater content, or the
    /// list length.
    fn list_index(tableau: &Tableau, number: u64) -> usize;

    /// Search row 0 for a positive value, column 0 for a negative one.
    fn landing(tableau: &Tableau, value: i64) -> Landing {
        let number = value.unsigned_abs();
        if value > 0 {
            return Self::row_landing(tableau, 0, number);
        }
        return Self::column_landing(tableau, 0, number);
    }
}

/// Runtime choice between the two strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    Linear,
    #[default]
    Binary,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Linear, Strategy::Binary];

    pub fn name(self) -> &'static str {
        return match self {
            Strategy::Linear => Linear::NAME,
            Strategy::Binary => Binary::NAME,
        };
    }

    /// Run the search with the selected strategy.
    pub fn landing(self, tableau: &Tableau, value: i64) -> Landing {
        return match self {
            Strategy::Linear => Linear::landing(tableau, value),
            Strategy::Binary => Binary::landing(tableau, value),
        };
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.name());
    }
}

impl FromStr for Strategy {
    type Err = DrsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        for strategy in Strategy::ALL {
            if name.eq_ignore_ascii_case(strategy.name()) {
                return Ok(strategy);
            }
        }
        return Err(DrsError::UnknownStrategy(name.to_string()));
    }
}
