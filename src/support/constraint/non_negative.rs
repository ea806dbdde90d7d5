use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type for values that are zero or greater.
///
/// Used for smoothing factors, where zero is meaningful (exact interpolation).
///
/// ```
/// use twine_tube_bank::support::constraint::NonNegative;
///
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(-1e-9).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Pressure, pressure::pascal};

    use crate::support::constraint::ConstraintResult;

    #[test]
    fn floats() -> ConstraintResult<()> {
        assert_eq!(NonNegative::new(2.5)?.into_inner(), 2.5);
        assert_eq!(NonNegative::new(-0.1), Err(ConstraintError::Negative));
        assert_eq!(
            NonNegative::new(f64::NAN).map(Constrained::into_inner).err(),
            Some(ConstraintError::NotANumber)
        );
        Ok(())
    }

    #[test]
    fn pressures() {
        assert!(NonNegative::new(Pressure::new::<pascal>(0.0)).is_ok());
        assert!(NonNegative::new(Pressure::new::<pascal>(-3.0)).is_err());
    }
}
