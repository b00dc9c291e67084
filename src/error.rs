//! Errors raised at the boundary of the crate.
//!
//! The insertion algorithms themselves are total over a validated
//! [`SignedPermutation`](crate::permutation::SignedPermutation). Everything
//! that can go wrong is caught while parsing or validating input.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, DrsError>;

/// Why an entry of a signed permutation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueProblem {
    /// The entry is zero, which has no sign.
    Zero,
    /// The absolute value already appeared at 1-based index `first`.
    Repeated { first: usize },
}

impl std::fmt::Display for ValueProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            ValueProblem::Zero => write!(f, "zero is not a signed value"),
            ValueProblem::Repeated { first } => {
                write!(f, "absolute value already used at position {}", first)
            }
        };
    }
}

/// Error type for the crate.
#[derive(Debug, Error)]
pub enum DrsError {
    /// A token could not be read as a base-10 signed integer.
    #[error("invalid permutation format: token {token:?} at position {position}")]
    InvalidPermutationFormat { token: String, position: usize },

    /// A well-formed integer that cannot be part of a signed permutation.
    #[error("invalid permutation value {value} at position {position}: {reason}")]
    InvalidPermutationValue {
        value: i64,
        position: usize,
        reason: ValueProblem,
    },

    /// A strategy name that is neither `linear` nor `binary`.
    #[error("unknown insertion strategy {0:?}")]
    UnknownStrategy(String),

    /// A command-line flag was given without the value it takes.
    #[error("missing value for {0}")]
    MissingValue(&'static str),

    /// The linear and binary strategies produced different tableaux.
    #[error("insertion strategies disagree at step {step}")]
    StrategyMismatch { step: usize },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
