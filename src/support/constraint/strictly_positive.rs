use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type for values greater than zero.
///
/// Lengths, densities, and viscosities entering the correlations are
/// divided by, so zero is rejected along with negative values.
///
/// ```
/// use twine_tube_bank::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Length, length::meter};
///
/// assert!(StrictlyPositive::new(Length::new::<meter>(0.05)).is_ok());
/// assert!(StrictlyPositive::new(Length::new::<meter>(0.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};

    use crate::support::constraint::ConstraintResult;

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(1e-12).is_ok());
        assert_eq!(
            StrictlyPositive::new(0.0).map(Constrained::into_inner),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            StrictlyPositive::new(-4.0).map(Constrained::into_inner),
            Err(ConstraintError::Negative)
        );
    }

    #[test]
    fn densities() -> ConstraintResult<()> {
        let rho = MassDensity::new::<kilogram_per_cubic_meter>(995.0);
        assert_eq!(StrictlyPositive::new(rho)?.as_ref(), &rho);

        let rho = MassDensity::new::<kilogram_per_cubic_meter>(f64::NAN);
        assert!(StrictlyPositive::new(rho).is_err());
        Ok(())
    }
}
