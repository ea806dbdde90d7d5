//! Bell-Delaware shell-side correction factors.
//!
//! The Bell-Delaware method scales an ideal tube-bank heat transfer
//! coefficient by factors accounting for the baffle cut (`Jc`), leakage
//! through baffle clearances (`Jl`), and flow bypassing the bundle (`Jb`).
//! Each factor is read from a fitted chart in the shared
//! [`registry`](super::charts::registry).

use tracing::trace;
use uom::si::{f64::Area, ratio::ratio};

use super::{
    TubeBankError,
    charts::{self, registry},
};
use crate::support::constraint::UnitInterval;

/// Flow regime selecting the bundle-bypass chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BellRegime {
    Laminar,
    #[default]
    Turbulent,
}

/// Baffle-cut correction `Jc`.
///
/// Takes the fraction of tubes in pure crossflow between baffle tips. The
/// fitted curve is evaluated as is, so fractions outside `[0, 1]`
/// extrapolate.
///
/// # Example
///
/// ```
/// use twine_tube_bank::support::tube_bank::bell::baffle_cut_correction;
///
/// let jc = baffle_cut_correction(0.82);
/// assert!((jc - 1.1258554691854046).abs() < 1e-9);
/// ```
#[must_use]
pub fn baffle_cut_correction(crossflow_tube_fraction: f64) -> f64 {
    registry().baffle_cut().evaluate(crossflow_tube_fraction)
}

/// Baffle-cut correction `Jc` for each fraction in turn.
#[must_use]
pub fn baffle_cut_corrections(crossflow_tube_fractions: &[f64]) -> Vec<f64> {
    registry().baffle_cut().evaluate_many(crossflow_tube_fractions)
}

/// Baffle leakage correction `Jl`, capped at 1.
///
/// Takes the shell-to-baffle leakage area `Ssb`, the tube-to-baffle leakage
/// area `Stb`, and the crossflow area at the bundle centreline `Sm`. Leakage
/// ratios `(Ssb + Stb) / Sm` past the end of the chart read at its last
/// point.
///
/// # Errors
///
/// Returns [`TubeBankError::SplitFractionOutOfBounds`] if `Ssb / (Ssb + Stb)`
/// is not within `[0, 1]`.
pub fn baffle_leakage_correction(
    shell_to_baffle: Area,
    tube_to_baffle: Area,
    crossflow: Area,
) -> Result<f64, TubeBankError> {
    let leakage = shell_to_baffle + tube_to_baffle;

    let fraction = (shell_to_baffle / leakage).get::<ratio>();
    let split = UnitInterval::new(fraction)
        .map_err(|source| TubeBankError::SplitFractionOutOfBounds { fraction, source })?
        .into_inner();

    let area_ratio = (leakage / crossflow).get::<ratio>();
    let max_ratio = charts::max_leakage_area_ratio();
    if area_ratio > max_ratio {
        trace!(area_ratio, max_ratio, "leakage area ratio clamped to chart");
    }

    let jl = registry()
        .leakage()
        .evaluate(at_most(area_ratio, max_ratio), split);
    Ok(at_most(jl, 1.0))
}

/// Bundle bypass correction `Jb`, capped at 1.
///
/// Takes the bypass area as a fraction of the crossflow area, the number of
/// sealing strip pairs, and the number of tube rows crossed between baffle
/// tips. Bypass fractions past the end of the chart read at its last point.
///
/// # Example
///
/// ```
/// use twine_tube_bank::support::tube_bank::bell::{BellRegime, bundle_bypass_correction};
///
/// let jb = bundle_bypass_correction(0.5, 5, 25, BellRegime::Turbulent);
/// assert!((jb - 0.8469611761197694).abs() < 1e-9);
/// ```
#[must_use]
pub fn bundle_bypass_correction(
    bypass_area_fraction: f64,
    seal_strips: u32,
    crossflow_rows: u32,
    regime: BellRegime,
) -> f64 {
    let strips_per_row = f64::from(seal_strips) / f64::from(crossflow_rows.max(1));

    let max_fraction = charts::max_bypass_area_fraction();
    if bypass_area_fraction > max_fraction {
        trace!(bypass_area_fraction, max_fraction, "bypass area fraction clamped to chart");
    }

    let jb = registry()
        .bypass(regime)
        .evaluate(at_most(bypass_area_fraction, max_fraction), strips_per_row);
    at_most(jb, 1.0)
}

/// Caps `value` at `max`, passing NaN through.
fn at_most(value: f64, max: f64) -> f64 {
    if value > max { max } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::area::square_meter;

    fn m2(value: f64) -> Area {
        Area::new::<square_meter>(value)
    }

    #[test]
    fn baffle_cut_reference_values() {
        assert_relative_eq!(baffle_cut_correction(0.82), 1.1258554691854046, max_relative = 1e-9);
        assert_relative_eq!(baffle_cut_correction(0.0), 0.5328447885827443, max_relative = 1e-9);
        assert_relative_eq!(baffle_cut_correction(0.5), 0.9345478582873351, max_relative = 1e-9);
        assert_relative_eq!(baffle_cut_correction(1.0), 1.031424412028823, max_relative = 1e-9);
    }

    #[test]
    fn baffle_cut_slice_matches_scalar() {
        let fractions = [0.0, 0.5, 0.82, 1.0];
        let many = baffle_cut_corrections(&fractions);
        assert_eq!(many.len(), fractions.len());
        for (jc, fraction) in many.iter().zip(fractions) {
            assert_eq!(*jc, baffle_cut_correction(fraction));
        }
        assert!(baffle_cut_corrections(&[]).is_empty());
    }

    #[test]
    fn leakage_reference_value() -> Result<(), TubeBankError> {
        let jl = baffle_leakage_correction(m2(1.0), m2(3.0), m2(8.0))?;
        assert_relative_eq!(jl, 0.5906621282470393, max_relative = 1e-9);
        Ok(())
    }

    #[test]
    fn leakage_ratio_clamps_to_chart() -> Result<(), TubeBankError> {
        let at_end =
            baffle_leakage_correction(m2(0.743614 * 0.25), m2(0.743614 * 0.75), m2(1.0))?;
        assert_relative_eq!(at_end, 0.4540959882735217, max_relative = 1e-9);

        let beyond = baffle_leakage_correction(m2(0.5), m2(1.5), m2(1.0))?;
        assert_relative_eq!(beyond, at_end, max_relative = 1e-9);
        Ok(())
    }

    #[test]
    fn leakage_is_capped_at_one() -> Result<(), TubeBankError> {
        let raw = registry().leakage().evaluate(0.0, 0.0);
        assert_relative_eq!(raw, 1.0001228445490005, max_relative = 1e-9);

        let jl = baffle_leakage_correction(m2(0.0), m2(1e-12), m2(1.0))?;
        assert!(jl <= 1.0);
        Ok(())
    }

    #[test]
    fn leakage_rejects_bad_split() {
        let err = baffle_leakage_correction(m2(-1.0), m2(1.0), m2(1.0)).unwrap_err();
        assert!(matches!(err, TubeBankError::SplitFractionOutOfBounds { .. }));

        let err = baffle_leakage_correction(m2(0.0), m2(0.0), m2(1.0)).unwrap_err();
        assert!(matches!(err, TubeBankError::SplitFractionOutOfBounds { .. }));
    }

    #[test]
    fn bypass_reference_values() {
        let turbulent = bundle_bypass_correction(0.5, 5, 25, BellRegime::Turbulent);
        assert_relative_eq!(turbulent, 0.8469611761197694, max_relative = 1e-9);

        let laminar = bundle_bypass_correction(0.5, 5, 25, BellRegime::Laminar);
        assert_relative_eq!(laminar, 0.8327442867828514, max_relative = 1e-9);
    }

    #[test]
    fn bypass_clamps_and_caps() {
        let beyond = bundle_bypass_correction(0.9, 1, 10, BellRegime::Turbulent);
        assert_relative_eq!(beyond, 0.6992587947401224, max_relative = 1e-9);

        let raw = registry().bypass(BellRegime::Turbulent).evaluate(0.3, 0.0);
        assert_relative_eq!(raw, 0.6892566955865315, max_relative = 1e-9);

        let no_bypass = bundle_bypass_correction(0.0, 0, 10, BellRegime::Turbulent);
        assert_relative_eq!(no_bypass, 0.9992518012445563, max_relative = 1e-9);
    }

    #[test]
    fn nan_inputs_propagate() {
        assert!(baffle_cut_correction(f64::NAN).is_nan());
        assert!(bundle_bypass_correction(f64::NAN, 5, 25, BellRegime::Turbulent).is_nan());

        let jl = baffle_leakage_correction(m2(1.0), m2(3.0), m2(f64::NAN));
        assert!(jl.is_ok_and(f64::is_nan));
    }

    #[test]
    fn default_regime_is_turbulent() {
        assert_eq!(BellRegime::default(), BellRegime::Turbulent);
    }

    mod proptests {
        use super::*;

        use proptest::prelude::*;

        proptest! {
            #[test]
            fn leakage_never_exceeds_one(
                shell in 0.0..1.0_f64,
                tube in 1e-6..1.0_f64,
                crossflow in 0.1..5.0_f64,
            ) {
                let jl = baffle_leakage_correction(m2(shell), m2(tube), m2(crossflow))?;
                prop_assert!(jl <= 1.0);
            }

            #[test]
            fn bypass_never_exceeds_one(
                fraction in 0.0..1.0_f64,
                strips in 0u32..10,
                rows in 1u32..40,
                laminar in any::<bool>(),
            ) {
                let regime = if laminar { BellRegime::Laminar } else { BellRegime::Turbulent };
                prop_assert!(bundle_bypass_correction(fraction, strips, rows, regime) <= 1.0);
            }
        }
    }
}
