//! The Domino Robinson-Schensted driver: fold a signed permutation into a
//! tableau, one insertion step per entry.

use log::debug;

use crate::error::{DrsError, Result};
use crate::insertion::{InsertionStrategy, Strategy};
use crate::permutation::SignedPermutation;
use crate::tableau::Tableau;

/// Build the domino tableau of `permutation` with the default strategy.
pub fn compute_tableau(permutation: &SignedPermutation) -> Result<Tableau> {
    return compute_tableau_with(permutation, Strategy::default());
}

/// Build the domino tableau of `permutation` with the given strategy.
///
/// Refuses permutations that fail [`SignedPermutation::validate`].
pub fn compute_tableau_with(
    permutation: &SignedPermutation,
    strategy: Strategy,
) -> Result<Tableau> {
    permutation.validate()?;

    let mut tableau = Tableau::new();
    for value in permutation.iter() {
        tableau.step(value, strategy);
    }

    debug!(
        "{} tableau for [{}]: {} dominoes, rows {:?}",
        strategy,
        permutation,
        tableau.len(),
        tableau.row_lengths()
    );
    return Ok(tableau);
}

/// Statically dispatched form of [`compute_tableau_with`].
pub fn robinson_schensted<S: InsertionStrategy>(
    permutation: &SignedPermutation,
) -> Result<Tableau> {
    permutation.validate()?;

    let mut tableau = Tableau::new();
    for value in permutation.iter() {
        tableau.step_with::<S>(value);
    }
    return Ok(tableau);
}

/// Run both strategies side by side and compare after every step.
///
/// Returns [`DrsError::StrategyMismatch`] naming the first step (1-based)
/// at which the tableaux differ.
pub fn compute_tableau_checked(permutation: &SignedPermutation) -> Result<Tableau> {
    permutation.validate()?;

    let mut linear = Tableau::new();
    let mut binary = Tableau::new();
    for (i, value) in permutation.iter().enumerate() {
        let a = linear.step(value, Strategy::Linear);
        let b = binary.step(value, Strategy::Binary);
        if a != b || linear != binary {
            return Err(DrsError::StrategyMismatch { step: i + 1 });
        }
    }
    return Ok(binary);
}

/// Parse `text` and build its tableau: the one-call entry point.
pub fn calc(text: &str) -> Result<Tableau> {
    let permutation = SignedPermutation::parse(text)?;
    return compute_tableau(&permutation);
}
