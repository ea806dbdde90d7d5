//! Numeric invariants checked once, at construction.
//!
//! Correlation inputs such as tube diameters, pitches, densities, and chart
//! fractions only make sense within physical bounds. Wrapping them in
//! [`Constrained<T, C>`] moves the check to the point where a value enters the
//! crate, so the correlations themselves can assume valid inputs.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//! - [`UnitInterval`]: Closed unit interval `0 ≤ x ≤ 1`
//!
//! Each marker has an associated `new()` shorthand (e.g.
//! `StrictlyPositive::new(0.025)`), and further invariants can be added by
//! implementing [`Constraint<T>`] for a new marker type.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A numeric invariant checked when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use twine_tube_bank::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::millimeter};
///
/// let diameter = Constrained::<_, StrictlyPositive>::new(Length::new::<millimeter>(25.0)).unwrap();
/// assert_eq!(diameter.into_inner().get::<millimeter>(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
