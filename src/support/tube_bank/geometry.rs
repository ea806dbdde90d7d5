use uom::si::{f64::Length, ratio::ratio};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Layout of successive tube rows relative to the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// Rows line up behind one another (in-line bank).
    Aligned,
    /// Alternate rows are offset across the flow.
    Staggered,
}

impl Arrangement {
    /// Relative pitch difference above which a bank counts as staggered.
    pub const TOLERANCE: f64 = 0.05;

    /// Classifies a bank from its normal-to-parallel pitch ratio.
    ///
    /// A bank is staggered when `|1 - normal / parallel| > 0.05`.
    #[must_use]
    pub fn from_pitch_ratio(normal_over_parallel: f64) -> Self {
        if (1.0 - normal_over_parallel).abs() > Self::TOLERANCE {
            Self::Staggered
        } else {
            Self::Aligned
        }
    }
}

/// Centre-to-centre tube spacing along and across the flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pitches {
    parallel: Constrained<Length, StrictlyPositive>,
    normal: Constrained<Length, StrictlyPositive>,
}

impl Pitches {
    /// Creates tube pitches from the longitudinal (parallel to flow) and
    /// transverse (normal to flow) spacing.
    ///
    /// # Errors
    ///
    /// Returns an error if either pitch is not strictly positive.
    pub fn new(parallel: Length, normal: Length) -> ConstraintResult<Self> {
        Ok(Self {
            parallel: StrictlyPositive::new(parallel)?,
            normal: StrictlyPositive::new(normal)?,
        })
    }

    /// Pitch along the flow direction (longitudinal, `SL`).
    #[must_use]
    pub fn parallel(&self) -> Length {
        *self.parallel.as_ref()
    }

    /// Pitch across the flow direction (transverse, `ST`).
    #[must_use]
    pub fn normal(&self) -> Length {
        *self.normal.as_ref()
    }

    /// The ratio `normal / parallel`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        (self.normal() / self.parallel()).get::<ratio>()
    }

    #[must_use]
    pub fn arrangement(&self) -> Arrangement {
        Arrangement::from_pitch_ratio(self.ratio())
    }
}

/// Geometry of a bank of plain tubes in crossflow.
///
/// # Example
///
/// ```
/// use twine_tube_bank::support::tube_bank::{Arrangement, TubeBank};
/// use uom::si::{f64::Length, length::millimeter};
///
/// let bank = TubeBank::new(
///     Length::new::<millimeter>(25.0),
///     Length::new::<millimeter>(50.0),
///     Length::new::<millimeter>(70.0),
/// )
/// .unwrap();
///
/// assert_eq!(bank.arrangement(), Arrangement::Staggered);
/// assert!((bank.transverse_ratio() - 2.8).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeBank {
    tube_diameter: Constrained<Length, StrictlyPositive>,
    pitches: Pitches,
}

impl TubeBank {
    /// Creates a tube bank from the tube outer diameter and its pitches.
    ///
    /// # Errors
    ///
    /// Returns an error if any length is not strictly positive.
    pub fn new(
        tube_diameter: Length,
        pitch_parallel: Length,
        pitch_normal: Length,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            tube_diameter: StrictlyPositive::new(tube_diameter)?,
            pitches: Pitches::new(pitch_parallel, pitch_normal)?,
        })
    }

    /// Tube outer diameter.
    #[must_use]
    pub fn tube_diameter(&self) -> Length {
        *self.tube_diameter.as_ref()
    }

    #[must_use]
    pub fn pitches(&self) -> &Pitches {
        &self.pitches
    }

    /// Transverse pitch over tube diameter, `a = ST / Do`.
    #[must_use]
    pub fn transverse_ratio(&self) -> f64 {
        (self.pitches.normal() / self.tube_diameter()).get::<ratio>()
    }

    /// Longitudinal pitch over tube diameter, `b = SL / Do`.
    #[must_use]
    pub fn longitudinal_ratio(&self) -> f64 {
        (self.pitches.parallel() / self.tube_diameter()).get::<ratio>()
    }

    #[must_use]
    pub fn arrangement(&self) -> Arrangement {
        self.pitches.arrangement()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::length::meter;

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    #[test]
    fn classification_tolerance() {
        assert_eq!(Arrangement::from_pitch_ratio(1.0), Arrangement::Aligned);
        assert_eq!(Arrangement::from_pitch_ratio(1.04), Arrangement::Aligned);
        assert_eq!(Arrangement::from_pitch_ratio(0.96), Arrangement::Aligned);
        assert_eq!(Arrangement::from_pitch_ratio(1.06), Arrangement::Staggered);
        assert_eq!(Arrangement::from_pitch_ratio(0.5), Arrangement::Staggered);
    }

    #[test]
    fn ratios() -> ConstraintResult<()> {
        let bank = TubeBank::new(m(0.025), m(0.05), m(0.05))?;
        assert_eq!(bank.arrangement(), Arrangement::Aligned);
        assert_eq!(bank.transverse_ratio(), 2.0);
        assert_eq!(bank.longitudinal_ratio(), 2.0);
        assert_eq!(bank.pitches().ratio(), 1.0);
        Ok(())
    }

    #[test]
    fn rejects_non_physical_lengths() {
        assert!(TubeBank::new(m(0.0), m(0.05), m(0.05)).is_err());
        assert!(TubeBank::new(m(0.025), m(-0.05), m(0.05)).is_err());
        assert!(Pitches::new(m(0.05), m(f64::NAN)).is_err());
    }
}
