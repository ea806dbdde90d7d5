//! ESDU 73031 correlation for tube banks in crossflow.

use std::{fmt, str::FromStr};

use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

use super::{
    Arrangement, Crossflow, NusseltCorrelation, Pitches, TubeBank, TubeBankError,
    wall::{WallExponents, WallProperty, wall_factor},
};

/// Rows at and beyond which the tube-row correction is 1.
pub const FULL_BANK_ROWS: u32 = 10;

const F2_STAGGERED: [f64; 7] = [0.8593, 0.8984, 0.9268, 0.9482, 0.965, 0.9777, 0.9868];
const F2_INLINE: [f64; 7] = [0.8479, 0.8957, 0.9306, 0.9551, 0.9724, 0.9839, 0.9902];

const PRANDTL_EXPONENT: f64 = 0.34;
const WALL_EXPONENTS: WallExponents = WallExponents::symmetric(0.26);
const ANGLE_EXPONENT: f64 = 0.6;

/// Source of the ESDU tube-row correction table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowCorrectionMethod {
    /// The table as reproduced in Hewitt's Heat Exchanger Design Handbook.
    #[default]
    Hewitt,
}

impl fmt::Display for RowCorrectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hewitt => f.write_str("Hewitt"),
        }
    }
}

impl FromStr for RowCorrectionMethod {
    type Err = TubeBankError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name.eq_ignore_ascii_case("hewitt") {
            Ok(Self::Hewitt)
        } else {
            Err(TubeBankError::UnknownMethod {
                name: name.to_owned(),
            })
        }
    }
}

/// Tube-row correction factor `F2` for a bank of `tube_rows` rows.
///
/// Banks of one or two rows read the first table entry; banks of ten or more
/// rows are uncorrected.
///
/// # Example
///
/// ```
/// use twine_tube_bank::support::tube_bank::{
///     Arrangement,
///     esdu::{self, RowCorrectionMethod},
/// };
///
/// let f2 = esdu::tube_row_correction(4, Arrangement::Staggered, RowCorrectionMethod::Hewitt);
/// assert_eq!(f2, 0.8984);
/// ```
#[must_use]
pub fn tube_row_correction(
    tube_rows: u32,
    arrangement: Arrangement,
    method: RowCorrectionMethod,
) -> f64 {
    let table = match (method, arrangement) {
        (RowCorrectionMethod::Hewitt, Arrangement::Staggered) => &F2_STAGGERED,
        (RowCorrectionMethod::Hewitt, Arrangement::Aligned) => &F2_INLINE,
    };

    match tube_rows {
        0..=2 => table[0],
        rows if rows >= FULL_BANK_ROWS => 1.0,
        rows => table[(rows - 3) as usize],
    }
}

/// Inclination correction factor `F3 = sin(angle)^0.6`.
///
/// The angle is between the flow and the tube axis, so 90° is pure crossflow.
#[must_use]
pub fn tube_angle_correction(angle: Angle) -> f64 {
    angle.get::<radian>().sin().powf(ANGLE_EXPONENT)
}

/// Mean Nusselt number of a tube bank.
///
/// `Nu = a·Re^m·Pr^0.34·F1·F2·F3`, where `F1 = (Pr/Pr_w)^0.26` when a wall
/// Prandtl number is given, `F2` is the tube-row correction, and `F3` the
/// inclination correction.
#[must_use]
pub fn nusselt(flow: &Crossflow, pitches: &Pitches, angle: Angle) -> f64 {
    let re = flow.reynolds;
    let arrangement = pitches.arrangement();

    let (a, m) = match arrangement {
        Arrangement::Staggered if re <= 300.0 => (1.309, 0.36),
        Arrangement::Staggered if re <= 2e5 => (0.273, 0.635),
        Arrangement::Staggered => (0.124, 0.7),
        Arrangement::Aligned if re <= 300.0 => (0.742, 0.431),
        Arrangement::Aligned if re <= 2e5 => (0.211, 0.651),
        Arrangement::Aligned => (0.116, 0.7),
    };

    let f1 = flow.wall_prandtl.map_or(1.0, |wall| {
        wall_factor(
            WallProperty::Prandtl {
                bulk: flow.prandtl,
                wall,
            },
            WALL_EXPONENTS,
        )
    });
    let f2 = tube_row_correction(flow.tube_rows, arrangement, RowCorrectionMethod::Hewitt);
    let f3 = tube_angle_correction(angle);

    a * re.powf(m) * flow.prandtl.powf(PRANDTL_EXPONENT) * f1 * f2 * f3
}

/// The ESDU 73031 heat transfer correlation at a fixed flow inclination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Esdu73031 {
    pub angle: Angle,
}

impl Default for Esdu73031 {
    /// Pure crossflow.
    fn default() -> Self {
        Self {
            angle: Angle::new::<degree>(90.0),
        }
    }
}

impl NusseltCorrelation for Esdu73031 {
    fn nusselt(&self, flow: &Crossflow, bank: &TubeBank) -> f64 {
        nusselt(flow, bank.pitches(), self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Length, length::meter};

    use crate::support::constraint::ConstraintResult;

    fn pitches(parallel: f64, normal: f64) -> ConstraintResult<Pitches> {
        Pitches::new(Length::new::<meter>(parallel), Length::new::<meter>(normal))
    }

    fn degrees(value: f64) -> Angle {
        Angle::new::<degree>(value)
    }

    #[test]
    fn row_correction_tables() {
        let hewitt = RowCorrectionMethod::Hewitt;
        assert_eq!(tube_row_correction(4, Arrangement::Staggered, hewitt), 0.8984);
        assert_eq!(tube_row_correction(6, Arrangement::Aligned, hewitt), 0.9551);
        assert_eq!(tube_row_correction(1, Arrangement::Aligned, hewitt), 0.8479);
        assert_eq!(tube_row_correction(2, Arrangement::Staggered, hewitt), 0.8593);
        assert_eq!(tube_row_correction(9, Arrangement::Aligned, hewitt), 0.9902);
        assert_eq!(tube_row_correction(10, Arrangement::Staggered, hewitt), 1.0);
    }

    #[test]
    fn method_names() {
        assert_eq!(
            "Hewitt".parse::<RowCorrectionMethod>(),
            Ok(RowCorrectionMethod::Hewitt)
        );
        assert_eq!(
            "hewitt".parse::<RowCorrectionMethod>(),
            Ok(RowCorrectionMethod::Hewitt)
        );
        assert_eq!(RowCorrectionMethod::Hewitt.to_string(), "Hewitt");
        assert_eq!(
            "Kays".parse::<RowCorrectionMethod>(),
            Err(TubeBankError::UnknownMethod {
                name: "Kays".to_owned()
            })
        );
    }

    #[test]
    fn angle_correction() {
        assert_relative_eq!(
            tube_angle_correction(degrees(75.0)),
            0.9794139080247666,
            max_relative = 1e-12
        );
        assert_relative_eq!(tube_angle_correction(degrees(90.0)), 1.0);
    }

    #[test]
    fn nusselt_staggered() -> ConstraintResult<()> {
        let flow = Crossflow::new(1.32e4, 0.71, 8);
        let bank = pitches(0.09, 0.05)?;
        assert_relative_eq!(
            nusselt(&flow, &bank, degrees(90.0)),
            98.2563319140594,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            nusselt(&flow, &bank, degrees(75.0)),
            96.23361802812751,
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn breakpoints_close_the_lower_band() -> ConstraintResult<()> {
        let staggered = pitches(0.09, 0.05)?;
        let aligned = pitches(0.05, 0.05)?;
        let bare = |re: f64, bank: &Pitches| {
            nusselt(&Crossflow::new(re, 1.0, FULL_BANK_ROWS), bank, degrees(90.0))
        };

        for (re, a, m) in [
            (300.0, 1.309, 0.36),
            (300.001, 0.273, 0.635),
            (2e5, 0.273, 0.635),
            (200_001.0, 0.124, 0.7),
        ] {
            assert_relative_eq!(bare(re, &staggered), a * re.powf(m), max_relative = 1e-12);
        }
        for (re, a, m) in [
            (300.0, 0.742, 0.431),
            (300.001, 0.211, 0.651),
            (2e5, 0.211, 0.651),
            (200_001.0, 0.116, 0.7),
        ] {
            assert_relative_eq!(bare(re, &aligned), a * re.powf(m), max_relative = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn nusselt_aligned_laminar_with_wall() -> ConstraintResult<()> {
        let flow = Crossflow::new(200.0, 0.71, 12).with_wall_prandtl(0.8);
        assert_relative_eq!(
            nusselt(&flow, &pitches(0.05, 0.05)?, degrees(90.0)),
            6.282021899244842,
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn default_correlation_is_crossflow() -> ConstraintResult<()> {
        let bank = TubeBank::new(
            Length::new::<meter>(0.025),
            Length::new::<meter>(0.09),
            Length::new::<meter>(0.05),
        )?;
        let flow = Crossflow::new(1.32e4, 0.71, 8);
        assert_relative_eq!(
            Esdu73031::default().nusselt(&flow, &bank),
            98.2563319140594,
            max_relative = 1e-12
        );
        Ok(())
    }

    mod proptests {
        use super::*;

        use proptest::prelude::*;

        fn arrangement() -> impl Strategy<Value = Arrangement> {
            prop_oneof![Just(Arrangement::Aligned), Just(Arrangement::Staggered)]
        }

        proptest! {
            #[test]
            fn long_banks_are_uncorrected(rows in FULL_BANK_ROWS..1000, arrangement in arrangement()) {
                let f2 = tube_row_correction(rows, arrangement, RowCorrectionMethod::Hewitt);
                prop_assert_eq!(f2, 1.0);
            }

            #[test]
            fn correction_never_decreases(rows in 0u32..FULL_BANK_ROWS, arrangement in arrangement()) {
                let method = RowCorrectionMethod::Hewitt;
                let this = tube_row_correction(rows, arrangement, method);
                let next = tube_row_correction(rows + 1, arrangement, method);
                prop_assert!(this <= next);
            }

            #[test]
            fn angle_correction_is_a_fraction(angle in 1.0..=90.0_f64) {
                let f3 = tube_angle_correction(degrees(angle));
                prop_assert!(f3 > 0.0 && f3 <= 1.0);
            }
        }
    }
}
