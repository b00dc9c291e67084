//! Domino Robinson-Schensted insertion for signed permutations.
//!
//! A signed permutation is folded, entry by entry, into a domino tableau:
//! a grid anchored by a 1x1 zero square and tiled with 1x2 and 2x1
//! dominoes. Positive entries are placed along row 0, negative entries along
//! column 0.
//!
//! # Quick Start
//!
//! ```
//! use domino_rs::drs::calc;
//! use domino_rs::domino::DominoShape;
//!
//! let tableau = calc("2 -1 3").unwrap();
//!
//! let shapes: Vec<_> = tableau.dominoes().map(|d| (d.content, d.shape)).collect();
//! assert_eq!(shapes[0], (0, DominoShape::ZeroSquare));
//! assert_eq!(shapes[1], (1, DominoShape::Vertical));
//! assert_eq!(tableau.row_lengths()[0], 5);
//! ```
//!
//! Two insertion strategies are provided, [`Linear`](insertion::Linear) and
//! [`Binary`](insertion::Binary). They always build identical tableaux.

pub mod domino;
pub mod drs;
pub mod error;
pub mod grid;
pub mod insertion;
pub mod permutation;
pub mod tableau;
pub mod view;

pub use crate::drs::{calc, compute_tableau, compute_tableau_with};
pub use crate::error::{DrsError, Result};
pub use crate::insertion::{InsertionStrategy, Placement, Strategy};
pub use crate::permutation::SignedPermutation;
pub use crate::tableau::Tableau;
