//! Tube-bank correlation from the Heat Exchanger Design Handbook (HEDH).
//!
//! Gnielinski's single-row form: a laminar and a turbulent flat-plate
//! Nusselt number are combined on a Reynolds number based on the void
//! fraction of the bank, then scaled by an arrangement factor.

use std::f64::consts::PI;

use super::{Arrangement, Crossflow, NusseltCorrelation, TubeBank};

/// Rows at and beyond which the arrangement factor applies in full.
pub const FULL_BANK_ROWS: u32 = 10;

/// Void fraction `ψ` of the bank.
///
/// `ψ = 1 - π/(4a)` when `b ≥ 1`, otherwise `1 - π/(4ab)`, with `a = ST/Do`
/// and `b = SL/Do`.
#[must_use]
pub fn voidage(bank: &TubeBank) -> f64 {
    let a = bank.transverse_ratio();
    let b = bank.longitudinal_ratio();
    if b >= 1.0 {
        1.0 - PI / (4.0 * a)
    } else {
        1.0 - PI / (4.0 * a * b)
    }
}

/// Arrangement factor `fA` for a bank of `tube_rows` rows.
///
/// Banks of fewer than ten rows blend toward the single-row value:
/// `(1 + (N - 1)·fA) / N`.
#[must_use]
pub fn arrangement_factor(bank: &TubeBank, tube_rows: u32) -> f64 {
    let a = bank.transverse_ratio();
    let b = bank.longitudinal_ratio();

    let full = match bank.arrangement() {
        Arrangement::Aligned => {
            let r = b / a;
            1.0 + 0.7 / voidage(bank).powf(1.5) * (r - 0.3) / (r + 0.7).powi(2)
        }
        Arrangement::Staggered => 1.0 + 2.0 / (3.0 * b),
    };

    if tube_rows >= FULL_BANK_ROWS {
        return full;
    }
    let n = f64::from(tube_rows.max(1));
    (1.0 + (n - 1.0) * full) / n
}

/// Mean Nusselt number of a tube bank.
///
/// # Example
///
/// ```
/// use twine_tube_bank::support::tube_bank::{Crossflow, TubeBank, hedh};
/// use uom::si::{f64::Length, length::meter};
///
/// let bank = TubeBank::new(
///     Length::new::<meter>(0.03),
///     Length::new::<meter>(0.05),
///     Length::new::<meter>(0.05),
/// )
/// .unwrap();
///
/// let nu = hedh::nusselt(&Crossflow::new(1e4, 7.0, 10), &bank);
/// assert!((nu - 382.4636554404698).abs() < 1e-9);
/// ```
#[must_use]
pub fn nusselt(flow: &Crossflow, bank: &TubeBank) -> f64 {
    let re = flow.reynolds / voidage(bank);
    let pr = flow.prandtl;

    let laminar = 0.664 * re.sqrt() * pr.powf(1.0 / 3.0);
    let turbulent = 0.037 * re.powf(0.8) * pr / (1.0 + 2.443 * re.powf(-0.1) * (pr.powf(2.0 / 3.0) - 1.0));
    let single_row = 0.3 + laminar.hypot(turbulent);

    single_row * arrangement_factor(bank, flow.tube_rows)
}

/// The HEDH heat transfer correlation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hedh;

impl NusseltCorrelation for Hedh {
    fn nusselt(&self, flow: &Crossflow, bank: &TubeBank) -> f64 {
        nusselt(flow, bank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Length, length::meter};

    use crate::support::constraint::ConstraintResult;

    fn bank(diameter: f64, parallel: f64, normal: f64) -> ConstraintResult<TubeBank> {
        TubeBank::new(
            Length::new::<meter>(diameter),
            Length::new::<meter>(parallel),
            Length::new::<meter>(normal),
        )
    }

    #[test]
    fn reference_values() -> ConstraintResult<()> {
        assert_relative_eq!(
            nusselt(&Crossflow::new(1e4, 7.0, 10), &bank(0.03, 0.05, 0.05)?),
            382.4636554404698,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            nusselt(&Crossflow::new(10263.37, 0.708, 11), &bank(0.025, 0.05, 0.05)?),
            149.18735251017594,
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn short_bank() -> ConstraintResult<()> {
        assert_relative_eq!(
            nusselt(&Crossflow::new(1e4, 7.0, 4), &bank(0.03, 0.05, 0.05)?),
            353.20298674380666,
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn single_row_has_no_arrangement_effect() -> ConstraintResult<()> {
        assert_eq!(arrangement_factor(&bank(0.03, 0.05, 0.05)?, 1), 1.0);
        assert_eq!(arrangement_factor(&bank(0.03, 0.05, 0.08)?, 0), 1.0);
        Ok(())
    }

    #[test]
    fn voidage_of_square_bank() -> ConstraintResult<()> {
        assert_relative_eq!(voidage(&bank(0.025, 0.05, 0.05)?), 1.0 - PI / 8.0);
        assert_relative_eq!(
            voidage(&bank(0.025, 0.02, 0.05)?),
            1.0 - PI / (4.0 * 2.0 * 0.8),
            max_relative = 1e-12
        );
        Ok(())
    }
}
