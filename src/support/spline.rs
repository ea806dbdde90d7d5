//! Smoothing splines for digitized engineering charts.
//!
//! Charts read off published figures are noisy. Fitting them with smoothing
//! splines gives smooth, differentiable lookups whose closeness to the raw
//! points is set by a single smoothing factor `s`: the fit is the smoothest
//! spline whose residual sum of squares does not exceed `s`.
//!
//! - [`UnivariateSpline`]: curves `y(x)`, extrapolated past the data.
//! - [`BivariateSpline`]: surfaces `z(x, y)` over a rectangular grid, with
//!   queries clamped to the grid.
//!
//! Knot placement and the smoothing-parameter search follow Dierckx's FITPACK,
//! so a smoothing factor means the same thing here as in any FITPACK-based
//! tool used to tune it.
//!
//! # Example
//!
//! ```
//! use twine_tube_bank::support::spline::{FitStatus, UnivariateSpline};
//!
//! let x: Vec<f64> = (0..30).map(|i| f64::from(i) * 0.1).collect();
//! let y: Vec<f64> = x.iter().map(|v| v.exp()).collect();
//!
//! let spline = UnivariateSpline::fit(&x, &y, 3, 1e-4).unwrap();
//! assert!(spline.residual() <= 1e-4 * 1.001);
//! assert!(matches!(
//!     spline.status(),
//!     FitStatus::Converged | FitStatus::LeastSquaresPolynomial
//! ));
//! ```

mod bivariate;
mod bspline;
mod univariate;

use thiserror::Error;

pub use bivariate::BivariateSpline;
pub use univariate::UnivariateSpline;

use crate::support::constraint::{ConstraintError, NonNegative};

/// Highest supported polynomial degree.
pub const MAX_DEGREE: usize = 5;

/// Relative tolerance on the residual when matching the smoothing factor.
const TOLERANCE: f64 = 0.001;

/// Iteration limit of the smoothing-parameter search.
const MAX_ITERATIONS: usize = 20;

/// Outcome of a spline fit.
///
/// Every status yields a usable spline; the non-converged ones mean the
/// residual does not match the smoothing factor to within tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStatus {
    /// The residual matches the smoothing factor.
    Converged,
    /// The spline interpolates the data, either by request or because the
    /// maximal knot count was reached.
    Interpolating,
    /// A single polynomial piece already meets the smoothing factor.
    LeastSquaresPolynomial,
    /// No further knots could be added; the spline is a least-squares fit.
    KnotLimit,
    /// The smoothing-parameter search hit its iteration limit.
    IterationLimit,
    /// The residual stopped decreasing monotonically in the smoothing parameter.
    Stalled,
}

impl FitStatus {
    /// Returns `true` if the fit honours the smoothing factor.
    #[must_use]
    pub fn is_converged(self) -> bool {
        matches!(
            self,
            Self::Converged | Self::Interpolating | Self::LeastSquaresPolynomial
        )
    }
}

/// Errors returned when fitting a spline to invalid data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// The degree is zero or larger than [`MAX_DEGREE`].
    #[error("spline degree {degree} is outside 1..={MAX_DEGREE}")]
    DegreeOutOfRange { degree: usize },

    /// The smoothing factor is negative or not a number.
    #[error("invalid smoothing factor")]
    Smoothing(#[source] ConstraintError),

    /// Two inputs that must agree in length do not.
    #[error("expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Not enough points for the requested degree.
    #[error("{points} points cannot determine a degree-{degree} spline")]
    TooFewPoints { points: usize, degree: usize },

    /// An abscissa is out of order.
    #[error("abscissae out of order at index {index}")]
    Unsorted { index: usize },
}

fn validate_degree(degree: usize) -> Result<(), SplineError> {
    if (1..=MAX_DEGREE).contains(&degree) {
        Ok(())
    } else {
        Err(SplineError::DegreeOutOfRange { degree })
    }
}

fn validate_smoothing(smoothing: f64) -> Result<f64, SplineError> {
    NonNegative::new(smoothing)
        .map(|s| s.into_inner())
        .map_err(SplineError::Smoothing)
}
