use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised by the tube-bank correlations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TubeBankError {
    /// The shell-to-baffle share of the leakage area is outside `[0, 1]`.
    ///
    /// This happens when a leakage area is negative or both are zero.
    #[error("shell-to-baffle leakage fraction {fraction} is outside [0, 1]")]
    SplitFractionOutOfBounds {
        fraction: f64,
        #[source]
        source: ConstraintError,
    },

    /// A correlation option was selected by a name that is not supported.
    #[error("unknown tube row correction method `{name}`")]
    UnknownMethod { name: String },

    /// An input quantity violates its physical constraint.
    #[error("invalid input: {0}")]
    Constraint(#[from] ConstraintError),
}
