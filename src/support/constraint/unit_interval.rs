use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError};

/// Supplies 0 and 1 for types used in the closed unit interval [0, 1].
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

/// Marker type for values in the closed unit interval `0 ≤ x ≤ 1`.
///
/// Fractions read against chart axes, such as the shell-to-baffle share of
/// the leakage area, use this constraint.
///
/// ```
/// use twine_tube_bank::support::constraint::UnitInterval;
///
/// assert!(UnitInterval::new(0.25).is_ok());
/// assert!(UnitInterval::new(1.0).is_ok());
/// assert!(UnitInterval::new(-0.5).is_err());
/// assert!(UnitInterval::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if 0 ≤ value ≤ 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_inside() {
        assert!(UnitInterval::new(0.0).is_ok());
        assert!(UnitInterval::new(1.0).is_ok());
    }

    #[test]
    fn reports_which_side_failed() {
        assert_eq!(
            UnitInterval::new(-1e-3).map(Constrained::into_inner),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            UnitInterval::new(1.5).map(Constrained::into_inner),
            Err(ConstraintError::AboveMaximum)
        );
    }
}
