//! Fitted engineering charts.
//!
//! Every chart-backed correlation reads from one [`ChartRegistry`], built on
//! first use and shared for the life of the process. Building it fits all
//! smoothing splines, which takes a noticeable fraction of a second; call
//! [`warm_up`] at start-up to pay that cost up front.

mod bell;
mod grimison;
mod kern;
mod zukauskas;

use std::sync::LazyLock;

use tracing::{debug, warn};

use super::{Arrangement, bell::BellRegime};
use crate::support::spline::{BivariateSpline, FitStatus, UnivariateSpline};

/// Smoothing factor of the Kern friction curve.
const KERN_SMOOTHING: f64 = 0.1;
/// Smoothing factor of the Bell baffle-cut curve.
const BAFFLE_CUT_SMOOTHING: f64 = 8e-5;
/// Smoothing factor of the Bell leakage surface.
const LEAKAGE_SMOOTHING: f64 = 0.002;
/// Smoothing factor of the Bell bypass surfaces.
const BYPASS_SMOOTHING: f64 = 0.0007;
/// Smoothing factor of the Zukauskas friction and correction surfaces.
const ZUKAUSKAS_SMOOTHING: f64 = 0.002;

static REGISTRY: LazyLock<ChartRegistry> = LazyLock::new(ChartRegistry::build);

/// Returns the shared chart registry, fitting it on first access.
#[must_use]
pub fn registry() -> &'static ChartRegistry {
    &REGISTRY
}

/// Fits every chart now rather than on the first correlation call.
pub fn warm_up() {
    LazyLock::force(&REGISTRY);
}

/// The fitted charts behind the tube-bank correlations.
#[derive(Debug)]
pub struct ChartRegistry {
    kern_friction: UnivariateSpline,
    baffle_cut: UnivariateSpline,
    leakage: BivariateSpline,
    bypass_turbulent: BivariateSpline,
    bypass_laminar: BivariateSpline,
    zukauskas_staggered_friction: BivariateSpline,
    zukauskas_inline_friction: BivariateSpline,
    zukauskas_staggered_correction: BivariateSpline,
    zukauskas_inline_correction: BivariateSpline,
    grimison_aligned_c1: BivariateSpline,
    grimison_aligned_m: BivariateSpline,
    grimison_staggered: RaggedTable,
}

impl ChartRegistry {
    fn build() -> Self {
        let kern_friction = kern::FRICTION_FACTORS.map(|f| f * kern::FRICTION_SCALE);

        Self {
            kern_friction: curve(
                "kern friction",
                &kern::REYNOLDS,
                &kern_friction,
                KERN_SMOOTHING,
            ),
            baffle_cut: curve(
                "bell baffle cut",
                &bell::BAFFLE_CUT_FRACTIONS,
                &bell::BAFFLE_CUT_FACTORS,
                BAFFLE_CUT_SMOOTHING,
            ),
            leakage: surface(
                "bell leakage",
                &bell::LEAKAGE_AREA_RATIOS,
                &bell::LEAKAGE_SPLITS,
                &bell::LEAKAGE_FACTORS,
                [3, 1],
                LEAKAGE_SMOOTHING,
            ),
            bypass_turbulent: surface(
                "bell bypass (turbulent)",
                &bell::BYPASS_AREA_FRACTIONS,
                &bell::SEAL_STRIP_RATIOS,
                &bell::BYPASS_TURBULENT,
                [3, 3],
                BYPASS_SMOOTHING,
            ),
            bypass_laminar: surface(
                "bell bypass (laminar)",
                &bell::BYPASS_AREA_FRACTIONS,
                &bell::SEAL_STRIP_RATIOS,
                &bell::BYPASS_LAMINAR,
                [3, 3],
                BYPASS_SMOOTHING,
            ),
            zukauskas_staggered_friction: surface(
                "zukauskas staggered friction",
                &zukauskas::STAGGERED_REYNOLDS,
                &zukauskas::PITCH_RATIOS,
                &zukauskas::STAGGERED_FRICTION,
                [3, 3],
                ZUKAUSKAS_SMOOTHING,
            ),
            zukauskas_inline_friction: surface(
                "zukauskas inline friction",
                &zukauskas::INLINE_REYNOLDS,
                &zukauskas::PITCH_RATIOS,
                &zukauskas::INLINE_FRICTION,
                [3, 3],
                ZUKAUSKAS_SMOOTHING,
            ),
            zukauskas_staggered_correction: surface(
                "zukauskas staggered correction",
                &zukauskas::STAGGERED_CORRECTION_PARAMETERS,
                &zukauskas::STAGGERED_CORRECTION_REYNOLDS,
                &zukauskas::STAGGERED_CORRECTION,
                [1, 3],
                ZUKAUSKAS_SMOOTHING,
            ),
            zukauskas_inline_correction: surface(
                "zukauskas inline correction",
                &zukauskas::INLINE_CORRECTION_PARAMETERS,
                &zukauskas::INLINE_CORRECTION_REYNOLDS,
                &zukauskas::INLINE_CORRECTION,
                [1, 3],
                ZUKAUSKAS_SMOOTHING,
            ),
            grimison_aligned_c1: table(
                "grimison aligned C1",
                &grimison::ALIGNED_PITCH_RATIOS,
                &grimison::ALIGNED_C1,
            ),
            grimison_aligned_m: table(
                "grimison aligned m",
                &grimison::ALIGNED_PITCH_RATIOS,
                &grimison::ALIGNED_M,
            ),
            grimison_staggered: RaggedTable::new(&grimison::STAGGERED_COLUMNS),
        }
    }

    /// Kern's dimensionless shell-side friction factor against Reynolds number.
    #[must_use]
    pub fn kern_friction(&self) -> &UnivariateSpline {
        &self.kern_friction
    }

    /// Bell's baffle-cut correction `Jc` against the crossflow tube fraction.
    #[must_use]
    pub fn baffle_cut(&self) -> &UnivariateSpline {
        &self.baffle_cut
    }

    /// Bell's leakage correction `Jl` over (leakage-to-crossflow area ratio,
    /// shell-to-baffle share of the leakage area).
    #[must_use]
    pub fn leakage(&self) -> &BivariateSpline {
        &self.leakage
    }

    /// Bell's bypass correction `Jb` over (bypass area fraction, sealing
    /// strips per crossflow row).
    #[must_use]
    pub fn bypass(&self, regime: BellRegime) -> &BivariateSpline {
        match regime {
            BellRegime::Laminar => &self.bypass_laminar,
            BellRegime::Turbulent => &self.bypass_turbulent,
        }
    }

    /// Zukauskas friction factor over (Reynolds number, pitch ratio).
    ///
    /// The pitch ratio is `ST / Do` for staggered banks and `SL / Do` for
    /// aligned ones.
    #[must_use]
    pub fn zukauskas_friction(&self, arrangement: Arrangement) -> &BivariateSpline {
        match arrangement {
            Arrangement::Aligned => &self.zukauskas_inline_friction,
            Arrangement::Staggered => &self.zukauskas_staggered_friction,
        }
    }

    /// Zukauskas geometry correction over (pitch parameter, Reynolds number).
    #[must_use]
    pub fn zukauskas_correction(&self, arrangement: Arrangement) -> &BivariateSpline {
        match arrangement {
            Arrangement::Aligned => &self.zukauskas_inline_correction,
            Arrangement::Staggered => &self.zukauskas_staggered_correction,
        }
    }

    /// Grimison's `(C1, m)` for a bank with the given pitch-to-diameter ratios.
    ///
    /// Both tables are read with the longitudinal ratio on their first axis
    /// and the transverse ratio on their second. Aligned coefficients come
    /// from interpolating bicubic surfaces. The staggered table is ragged, so
    /// it is interpolated linearly down each column and then across columns.
    /// Both clamp to the table.
    #[must_use]
    pub fn grimison(&self, arrangement: Arrangement, transverse: f64, longitudinal: f64) -> (f64, f64) {
        match arrangement {
            Arrangement::Aligned => (
                self.grimison_aligned_c1.evaluate(longitudinal, transverse),
                self.grimison_aligned_m.evaluate(longitudinal, transverse),
            ),
            Arrangement::Staggered => {
                let [c1, m] = self.grimison_staggered.evaluate(longitudinal, transverse);
                (c1, m)
            }
        }
    }
}

/// Upper end of the leakage area ratio axis.
pub(super) fn max_leakage_area_ratio() -> f64 {
    bell::LEAKAGE_AREA_RATIOS[bell::LEAKAGE_AREA_RATIOS.len() - 1]
}

/// Upper end of the bypass area fraction axis.
pub(super) fn max_bypass_area_fraction() -> f64 {
    bell::BYPASS_AREA_FRACTIONS[bell::BYPASS_AREA_FRACTIONS.len() - 1]
}

fn curve(name: &str, x: &[f64], y: &[f64], smoothing: f64) -> UnivariateSpline {
    let spline = UnivariateSpline::fit(x, y, 3, smoothing)
        .expect("built-in chart data should always be valid spline input");
    report(name, &[spline.knots().len()], spline.residual(), spline.status());
    spline
}

/// Fits a surface to chart curves, one curve per entry of `y`.
fn surface<const M: usize, const N: usize>(
    name: &str,
    x: &[f64; M],
    y: &[f64; N],
    curves: &[[f64; M]; N],
    degrees: [usize; 2],
    smoothing: f64,
) -> BivariateSpline {
    let z: Vec<f64> = (0..M)
        .flat_map(|i| curves.iter().map(move |curve| curve[i]))
        .collect();
    fit_surface(name, x, y, &z, degrees, smoothing)
}

/// Interpolates a square table whose rows follow the first axis.
fn table<const N: usize>(name: &str, axis: &[f64; N], rows: &[[f64; N]; N]) -> BivariateSpline {
    let z: Vec<f64> = rows.iter().flatten().copied().collect();
    fit_surface(name, axis, axis, &z, [3, 3], 0.0)
}

fn fit_surface(
    name: &str,
    x: &[f64],
    y: &[f64],
    z: &[f64],
    degrees: [usize; 2],
    smoothing: f64,
) -> BivariateSpline {
    let spline = BivariateSpline::fit(x, y, z, degrees, smoothing)
        .expect("built-in chart data should always be valid spline input");
    let [tx, ty] = spline.knots();
    report(name, &[tx.len(), ty.len()], spline.residual(), spline.status());
    spline
}

fn report(name: &str, knots: &[usize], residual: f64, status: FitStatus) {
    debug!(chart = name, ?knots, residual, ?status, "fitted chart");
    if !status.is_converged() {
        warn!(chart = name, ?status, "chart fit did not meet its smoothing factor");
    }
}

/// Clamped piecewise-linear lookup over columns of unequal length.
#[derive(Debug, Clone)]
struct RaggedTable {
    columns: Vec<f64>,
    rows: Vec<Vec<f64>>,
    values: Vec<[Vec<f64>; 2]>,
}

impl RaggedTable {
    fn new(columns: &[(f64, &[(f64, f64, f64)])]) -> Self {
        Self {
            columns: columns.iter().map(|&(column, _)| column).collect(),
            rows: columns
                .iter()
                .map(|(_, entries)| entries.iter().map(|e| e.0).collect())
                .collect(),
            values: columns
                .iter()
                .map(|(_, entries)| {
                    [
                        entries.iter().map(|e| e.1).collect(),
                        entries.iter().map(|e| e.2).collect(),
                    ]
                })
                .collect(),
        }
    }

    fn evaluate(&self, column: f64, row: f64) -> [f64; 2] {
        [0, 1].map(|value| {
            let along: Vec<f64> = self
                .rows
                .iter()
                .zip(&self.values)
                .map(|(rows, values)| interpolate(rows, &values[value], row))
                .collect();
            interpolate(&self.columns, &along, column)
        })
    }
}

/// Linear interpolation in sorted `xs`, holding the end values outside.
fn interpolate(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let last = xs.len() - 1;
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[last] {
        return ys[last];
    }
    let i = xs.partition_point(|&v| v <= x).saturating_sub(1).min(last - 1);
    let fraction = (x - xs[i]) / (xs[i + 1] - xs[i]);
    ys[i] + fraction * (ys[i + 1] - ys[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn smoothing_fits_converge() {
        let charts = registry();
        assert_eq!(charts.kern_friction().status(), FitStatus::Converged);
        assert_eq!(charts.baffle_cut().status(), FitStatus::Converged);
        assert_eq!(charts.leakage().status(), FitStatus::Converged);
        for regime in [BellRegime::Laminar, BellRegime::Turbulent] {
            assert_eq!(charts.bypass(regime).status(), FitStatus::Converged);
        }
        for arrangement in [Arrangement::Aligned, Arrangement::Staggered] {
            assert_eq!(charts.zukauskas_friction(arrangement).status(), FitStatus::Converged);
            assert_eq!(charts.zukauskas_correction(arrangement).status(), FitStatus::Converged);
        }
    }

    #[test]
    fn kern_knots() {
        let spline = registry().kern_friction();
        assert_eq!(spline.knots().len(), 15);
        assert!(spline.residual() <= KERN_SMOOTHING * 1.001);
    }

    #[test]
    fn baffle_cut_knots() {
        let expected = [
            0.0, 0.0, 0.0, 0.0, 0.517361, 0.802083, 0.866319, 0.934028, 0.977431, 1.0, 1.0, 1.0,
            1.0,
        ];
        let knots = registry().baffle_cut().knots();
        assert_eq!(knots.len(), expected.len());
        for (knot, expected) in knots.iter().zip(expected) {
            assert_relative_eq!(*knot, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn leakage_knots() {
        let [tx, ty] = registry().leakage().knots();
        let expected_x = [
            0.0, 0.0, 0.0, 0.0, 0.0213694, 0.0552542, 0.144818, 0.347109, 0.743614, 0.743614,
            0.743614, 0.743614,
        ];
        assert_eq!(tx.len(), expected_x.len());
        for (knot, expected) in tx.iter().zip(expected_x) {
            assert_relative_eq!(*knot, expected, epsilon = 1e-6);
        }
        assert_eq!(ty, &[0.0, 0.0, 0.25, 0.5, 0.75, 1.0, 1.0]);
    }

    #[test]
    fn bypass_knots() {
        let [tx, ty] = registry().bypass(BellRegime::Turbulent).knots();
        assert_eq!(tx.len(), 9);
        assert_relative_eq!(tx[4], 0.434967, epsilon = 1e-6);
        assert_eq!(ty.len(), 10);
        assert_relative_eq!(ty[4], 0.1);
        assert_relative_eq!(ty[5], 1.0 / 6.0);

        let [tx, ty] = registry().bypass(BellRegime::Laminar).knots();
        assert_eq!((tx.len(), ty.len()), (9, 10));
    }

    #[test]
    fn grimison_tables_interpolate() {
        let charts = registry();
        for (i, &longitudinal) in grimison::ALIGNED_PITCH_RATIOS.iter().enumerate() {
            for (j, &transverse) in grimison::ALIGNED_PITCH_RATIOS.iter().enumerate() {
                let (c1, m) = charts.grimison(Arrangement::Aligned, transverse, longitudinal);
                assert_relative_eq!(c1, grimison::ALIGNED_C1[i][j], epsilon = 1e-9);
                assert_relative_eq!(m, grimison::ALIGNED_M[i][j], epsilon = 1e-9);
            }
        }
        assert_eq!(charts.grimison_aligned_c1.status(), FitStatus::Interpolating);
    }

    #[test]
    fn ragged_table_interpolates_between_columns() {
        let (c1, m) = registry().grimison(Arrangement::Staggered, 2.0, 0.07 / 0.025);
        assert_relative_eq!(c1, 0.4556, max_relative = 1e-12);
        assert_relative_eq!(m, 0.5672, max_relative = 1e-12);

        let (c1, m) = registry().grimison(Arrangement::Staggered, 0.07 / 0.025, 2.0);
        assert_relative_eq!(c1, 0.4484, max_relative = 1e-12);
        assert_relative_eq!(m, 0.5608, max_relative = 1e-12);
    }

    #[test]
    fn ragged_table_clamps() {
        const COLUMNS: [(f64, &[(f64, f64, f64)]); 2] = [
            (1.0, &[(1.0, 1.0, 10.0), (2.0, 2.0, 20.0)]),
            (2.0, &[(1.0, 3.0, 30.0), (1.5, 4.0, 40.0), (3.0, 5.0, 50.0)]),
        ];
        let table = RaggedTable::new(&COLUMNS);
        assert_eq!(table.evaluate(0.0, 0.0), [1.0, 10.0]);
        assert_eq!(table.evaluate(5.0, 9.0), [5.0, 50.0]);
        assert_eq!(table.evaluate(1.5, 1.0), [2.0, 20.0]);
        assert_eq!(table.evaluate(1.0, 1.5), [1.5, 15.0]);
    }

    #[test]
    fn interpolation_holds_ends() {
        let xs = [0.0, 1.0, 3.0];
        let ys = [0.0, 2.0, 4.0];
        assert_eq!(interpolate(&xs, &ys, -1.0), 0.0);
        assert_eq!(interpolate(&xs, &ys, 0.5), 1.0);
        assert_eq!(interpolate(&xs, &ys, 1.0), 2.0);
        assert_eq!(interpolate(&xs, &ys, 2.0), 3.0);
        assert_eq!(interpolate(&xs, &ys, 7.0), 4.0);
    }
}
