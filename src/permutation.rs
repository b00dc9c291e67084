//! Signed permutations, the input of the domino insertion.
//!
//! Values are stored 1-based: `values[0]` is a reserved zero so that
//! `values[i]` is the image of `i`.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;

use crate::error::{DrsError, Result, ValueProblem};

/// A signed permutation, stored with a leading reserved zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedPermutation {
    values: Vec<i64>,
}

impl Default for SignedPermutation {
    fn default() -> Self {
        return Self::new();
    }
}

impl SignedPermutation {
    /// The empty signed permutation.
    pub fn new() -> SignedPermutation {
        return SignedPermutation { values: vec![0] };
    }

    /// Wrap a 1-based value array as is.
    ///
    /// Nothing is checked here. A missing reserved entry is restored so that
    /// indexing stays 1-based; call [`validate`](Self::validate) (or let the
    /// driver do it) before building a tableau.
    pub fn from_values(mut values: Vec<i64>) -> SignedPermutation {
        if values.is_empty() {
            values.push(0);
        }
        return SignedPermutation { values };
    }

    /// Build from the signed entries alone, prepending the reserved zero.
    pub fn from_signed(entries: &[i64]) -> SignedPermutation {
        let mut values = Vec::with_capacity(entries.len() + 1);
        values.push(0);
        values.extend_from_slice(entries);
        return SignedPermutation { values };
    }

    /// Parse a whitespace separated list of signed integers.
    ///
    /// Empty input yields the empty permutation. Non-numeric tokens are
    /// rejected with [`DrsError::InvalidPermutationFormat`]; zeros and
    /// repeated absolute values with [`DrsError::InvalidPermutationValue`].
    pub fn parse(text: &str) -> Result<SignedPermutation> {
        let mut values = vec![0];
        for (i, token) in text.split_whitespace().enumerate() {
            let value = token.parse::<i64>().map_err(|_| DrsError::InvalidPermutationFormat {
                token: token.to_string(),
                position: i + 1,
            })?;
            values.push(value);
        }

        let permutation = SignedPermutation { values };
        permutation.validate()?;
        return Ok(permutation);
    }

    /// Check that every entry is non-zero and that absolute values are
    /// pairwise distinct.
    pub fn validate(&self) -> Result<()> {
        let mut seen: FxHashMap<u64, usize> = FxHashMap::default();
        for (position, value) in self.iter().enumerate() {
            let position = position + 1;
            if value == 0 {
                return Err(DrsError::InvalidPermutationValue {
                    value,
                    position,
                    reason: ValueProblem::Zero,
                });
            }
            if let Some(&first) = seen.get(&value.unsigned_abs()) {
                return Err(DrsError::InvalidPermutationValue {
                    value,
                    position,
                    reason: ValueProblem::Repeated { first },
                });
            }
            seen.insert(value.unsigned_abs(), position);
        }
        return Ok(());
    }

    /// Number of signed entries, not counting the reserved zero.
    pub fn len(&self) -> usize {
        return self.values.len() - 1;
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// The image of `i`, 1-based.
    pub fn get(&self, i: usize) -> Option<i64> {
        if i == 0 {
            return None;
        }
        return self.values.get(i).copied();
    }

    /// Iterate the signed entries in order, skipping the reserved zero.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        return self.values[1..].iter().copied();
    }

    /// The raw 1-based array, reserved zero included.
    pub fn values(&self) -> &[i64] {
        return &self.values;
    }
}

impl fmt::Display for SignedPermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        return Ok(());
    }
}

impl FromStr for SignedPermutation {
    type Err = DrsError;

    fn from_str(s: &str) -> Result<Self> {
        return SignedPermutation::parse(s);
    }
}
