use super::{
    FitStatus, MAX_ITERATIONS, SplineError, TOLERANCE,
    bspline::{
        KnotSet, SmoothingSearch, back_substitute, basis, discontinuity_jumps, givens,
        knots_to_add, rotate,
    },
    validate_degree, validate_smoothing,
};

/// A univariate smoothing spline of degree `k`.
///
/// The knots are chosen automatically: starting from the least-squares
/// polynomial, knots are added where the residual is largest until the
/// residual sum of squares can be brought down to the smoothing factor `s`.
/// The final spline minimizes roughness subject to `Σ (y_i - s(x_i))² ≈ s`.
///
/// With `s = 0` the spline interpolates the data.
///
/// # Example
///
/// ```
/// use twine_tube_bank::support::spline::UnivariateSpline;
///
/// let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = x.map(|v: f64| v * v);
/// let spline = UnivariateSpline::fit(&x, &y, 3, 0.0).unwrap();
///
/// assert!((spline.evaluate(2.5) - 6.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct UnivariateSpline {
    knots: Vec<f64>,
    coefficients: Vec<f64>,
    degree: usize,
    residual: f64,
    status: FitStatus,
}

/// Least-squares spline on a fixed knot vector, kept in triangularized form.
struct LeastSquares {
    /// Upper-triangular band, `k + 2` columns wide (the last one spare).
    band: Vec<Vec<f64>>,
    rhs: Vec<f64>,
    /// Non-zero basis values for every data point.
    observations: Vec<[f64; super::MAX_DEGREE + 1]>,
    coefficients: Vec<f64>,
    residual: f64,
}

impl UnivariateSpline {
    /// Fits a smoothing spline of the given degree through `(x, y)`.
    ///
    /// `x` must be non-decreasing with more than `degree` points.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError`] if the inputs are inconsistent, the degree is
    /// outside `1..=5`, or the smoothing factor is negative.
    pub fn fit(x: &[f64], y: &[f64], degree: usize, smoothing: f64) -> Result<Self, SplineError> {
        validate_degree(degree)?;
        let s = validate_smoothing(smoothing)?;
        if x.len() != y.len() {
            return Err(SplineError::LengthMismatch {
                expected: x.len(),
                actual: y.len(),
            });
        }
        if x.len() <= degree {
            return Err(SplineError::TooFewPoints {
                points: x.len(),
                degree,
            });
        }
        if let Some(index) = x.windows(2).position(|w| w[1] < w[0]) {
            return Err(SplineError::Unsorted { index: index + 1 });
        }

        Ok(Fitter { x, y, k: degree, s }.run())
    }

    /// Evaluates the spline at `x`.
    ///
    /// Outside the fitted range the boundary polynomial pieces are extended.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let t = &self.knots;
        let k = self.degree;
        let nk1 = t.len() - k - 1;

        let mut l = k;
        while l < nk1 - 1 && x >= t[l + 1] {
            l += 1;
        }

        let h = basis(t, k, x, l);
        (0..=k).map(|j| self.coefficients[l - k + j] * h[j]).sum()
    }

    /// Evaluates the spline at every point of `xs`.
    #[must_use]
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// The full knot vector, boundary knots included.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// B-spline coefficients, one per basis function.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Residual sum of squares of the fit.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.residual
    }

    /// How the knot and smoothing-parameter search ended.
    #[must_use]
    pub fn status(&self) -> FitStatus {
        self.status
    }
}

struct Fitter<'a> {
    x: &'a [f64],
    y: &'a [f64],
    k: usize,
    s: f64,
}

impl Fitter<'_> {
    fn run(&self) -> UnivariateSpline {
        let (x, k, s) = (self.x, self.k, self.s);
        let m = x.len();
        let k1 = k + 1;
        let nmax = m + k1;
        let accuracy = TOLERANCE * s;

        let (mut knots, capacity) = if s == 0.0 {
            (KnotSet::interpolating(nmax, k, x), nmax)
        } else {
            let capacity = (m / 2).max(2 * k1);
            (KnotSet::polynomial(capacity, k, m), capacity)
        };

        let mut fp0 = 0.0;
        let mut fpold = 0.0;
        let mut nplus = 0;

        let (fit, polynomial, fpms) = loop {
            let polynomial = knots.len() == knots.minimal();
            knots.set_boundary(x[0], x[m - 1]);
            let fit = self.least_squares(&knots);
            if polynomial {
                fp0 = fit.residual;
            }

            if s == 0.0 {
                return self.finish(&knots, fit.coefficients, fit.residual, FitStatus::Interpolating);
            }
            let fpms = fit.residual - s;
            if fpms.abs() < accuracy {
                let status = if polynomial {
                    FitStatus::LeastSquaresPolynomial
                } else {
                    FitStatus::Converged
                };
                return self.finish(&knots, fit.coefficients, fit.residual, status);
            }
            if fpms < 0.0 {
                break (fit, polynomial, fpms);
            }
            if knots.len() == nmax {
                return self.finish(&knots, fit.coefficients, fit.residual, FitStatus::Interpolating);
            }
            if knots.len() == capacity {
                return self.finish(&knots, fit.coefficients, fit.residual, FitStatus::KnotLimit);
            }

            nplus = if polynomial {
                1
            } else {
                knots_to_add(nplus, fpms, fpold - fit.residual, accuracy)
            };
            fpold = fit.residual;

            self.attribute_residuals(&mut knots, &fit);
            let before = knots.len();
            for _ in 0..nplus {
                if !knots.insert(x) {
                    break;
                }
                if knots.len() == nmax {
                    knots.place_interpolating(x);
                    break;
                }
                if knots.len() == capacity {
                    break;
                }
            }
            if knots.len() == before {
                return self.finish(&knots, fit.coefficients, fit.residual, FitStatus::KnotLimit);
            }
        };

        if polynomial {
            return self.finish(
                &knots,
                fit.coefficients,
                fit.residual,
                FitStatus::LeastSquaresPolynomial,
            );
        }

        self.smooth(&knots, &fit, fp0 - s, fpms)
    }

    /// Builds and solves the least-squares system on the current knots.
    fn least_squares(&self, knots: &KnotSet) -> LeastSquares {
        let (x, y, k) = (self.x, self.y, self.k);
        let t = knots.as_slice();
        let k1 = k + 1;
        let nk1 = t.len() - k1;

        let mut band = vec![vec![0.0; k + 2]; nk1];
        let mut rhs = vec![0.0; nk1];
        let mut observations = Vec::with_capacity(x.len());
        let mut residual = 0.0;

        let mut l = k;
        for (&xi, &yi) in x.iter().zip(y) {
            while !(xi < t[l + 1] || l == nk1 - 1) {
                l += 1;
            }
            let mut h = basis(t, k, xi, l);
            observations.push(h);

            let mut yi = yi;
            for i in 0..k1 {
                let piv = h[i];
                if piv == 0.0 {
                    continue;
                }
                let j = l - k + i;
                let (cos, sin, diagonal) = givens(piv, band[j][0]);
                band[j][0] = diagonal;
                (yi, rhs[j]) = rotate(cos, sin, yi, rhs[j]);
                if i == k {
                    break;
                }
                for i1 in i + 1..k1 {
                    (h[i1], band[j][i1 - i]) = rotate(cos, sin, h[i1], band[j][i1 - i]);
                }
            }
            residual += yi * yi;
        }

        let coefficients = back_substitute(&band, &rhs, nk1, k1);
        LeastSquares {
            band,
            rhs,
            observations,
            coefficients,
            residual,
        }
    }

    /// Spline value at a data point from its stored basis values.
    fn fitted(&self, observation: &[f64], coefficients: &[f64], lz: usize) -> f64 {
        (0..=self.k).map(|j| coefficients[lz + j] * observation[j]).sum()
    }

    /// Splits the residual among knot intervals, halving boundary points.
    fn attribute_residuals(&self, knots: &mut KnotSet, fit: &LeastSquares) {
        let k1 = self.k + 1;
        let nk1 = knots.len() - k1;
        let nrint = knots.intervals();
        let t = knots.as_slice().to_vec();

        let mut fpart = 0.0;
        let mut interval = 0;
        let mut lz = 0;
        for (it, (&xi, &yi)) in self.x.iter().zip(self.y).enumerate() {
            let crossed = xi >= t[lz + k1] && lz < nk1 - k1;
            if crossed {
                lz += 1;
            }
            let value = self.fitted(&fit.observations[it], &fit.coefficients, lz);
            let term = (value - yi).powi(2);
            fpart += term;
            if crossed {
                let store = term * 0.5;
                knots.fpint[interval] = fpart - store;
                interval += 1;
                fpart = store;
            }
        }
        knots.fpint[nrint - 1] = fpart;
    }

    /// Adds the smoothing term and iterates on `p` until the residual matches.
    fn smooth(&self, knots: &KnotSet, fit: &LeastSquares, f0: f64, fpms: f64) -> UnivariateSpline {
        let (x, y, k, s) = (self.x, self.y, self.k, self.s);
        let t = knots.as_slice();
        let n = t.len();
        let k1 = k + 1;
        let k2 = k + 2;
        let nk1 = n - k1;
        let n8 = n - 2 * k1;
        let accuracy = TOLERANCE * s;

        let jumps = discontinuity_jumps(t, n, k);
        let mut search = SmoothingSearch::new(f0, fpms, accuracy);
        let mut p = nk1 as f64 / fit.band.iter().map(|row| row[0]).sum::<f64>();

        let mut iteration = 0;
        loop {
            iteration += 1;
            let pinv = 1.0 / p;
            let mut rhs = fit.rhs.clone();
            let mut band = fit.band.clone();

            for (it, jump) in jumps.iter().enumerate() {
                let mut h = [0.0; super::MAX_DEGREE + 2];
                for (hi, &b) in h.iter_mut().zip(jump) {
                    *hi = b * pinv;
                }
                let mut yi = 0.0;
                for j in it..nk1 {
                    let (cos, sin, diagonal) = givens(h[0], band[j][0]);
                    band[j][0] = diagonal;
                    (yi, rhs[j]) = rotate(cos, sin, yi, rhs[j]);
                    if j == nk1 - 1 {
                        break;
                    }
                    let width = if j < n8 { k1 } else { nk1 - j - 1 };
                    for i in 0..width {
                        (h[i + 1], band[j][i + 1]) = rotate(cos, sin, h[i + 1], band[j][i + 1]);
                        h[i] = h[i + 1];
                    }
                    h[width] = 0.0;
                }
            }

            let coefficients = back_substitute(&band, &rhs, nk1, k2);

            let mut residual = 0.0;
            let mut lz = 0;
            for (it, (&xi, &yi)) in x.iter().zip(y).enumerate() {
                if xi >= t[lz + k1] && lz < nk1 - k1 {
                    lz += 1;
                }
                let value = self.fitted(&fit.observations[it], &coefficients, lz);
                residual += (value - yi).powi(2);
            }

            let excess = residual - s;
            if excess.abs() < accuracy {
                return self.finish(knots, coefficients, residual, FitStatus::Converged);
            }
            if iteration == MAX_ITERATIONS {
                return self.finish(knots, coefficients, residual, FitStatus::IterationLimit);
            }
            match search.next(p, excess) {
                Some(next) => p = next,
                None => return self.finish(knots, coefficients, residual, FitStatus::Stalled),
            }
        }
    }

    fn finish(
        &self,
        knots: &KnotSet,
        coefficients: Vec<f64>,
        residual: f64,
        status: FitStatus,
    ) -> UnivariateSpline {
        UnivariateSpline {
            knots: knots.as_slice().to_vec(),
            coefficients,
            degree: self.k,
            residual,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn interpolates_with_zero_smoothing() -> Result<(), SplineError> {
        let x: Vec<f64> = (0..8).map(|i| f64::from(i) * 0.5).collect();
        let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
        let spline = UnivariateSpline::fit(&x, &y, 3, 0.0)?;

        assert_eq!(spline.status(), FitStatus::Interpolating);
        assert_eq!(spline.knots().len(), x.len() + 4);
        for (&xi, &yi) in x.iter().zip(&y) {
            assert_relative_eq!(spline.evaluate(xi), yi, epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn reproduces_a_cubic_exactly() -> Result<(), SplineError> {
        let x: Vec<f64> = (0..12).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|v| 0.5 * v.powi(3) - v + 2.0).collect();
        let spline = UnivariateSpline::fit(&x, &y, 3, 1.0)?;

        assert_eq!(spline.status(), FitStatus::LeastSquaresPolynomial);
        assert_eq!(spline.knots().len(), 8);
        assert_relative_eq!(spline.evaluate(4.5), 0.5 * 4.5_f64.powi(3) - 2.5, max_relative = 1e-10);
        Ok(())
    }

    #[test]
    fn extrapolates_with_the_boundary_polynomial() -> Result<(), SplineError> {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 5.0, 7.0];
        let spline = UnivariateSpline::fit(&x, &y, 1, 0.0)?;

        assert_relative_eq!(spline.evaluate(-1.0), -1.0, epsilon = 1e-12);
        assert_relative_eq!(spline.evaluate(5.0), 11.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn smoothing_matches_the_requested_residual() -> Result<(), SplineError> {
        let x: Vec<f64> = (0..40).map(|i| f64::from(i) * 0.25).collect();
        let y: Vec<f64> = x
            .iter()
            .enumerate()
            .map(|(i, v)| v.sin() + if i % 2 == 0 { 0.05 } else { -0.05 })
            .collect();
        let s = 0.2;
        let spline = UnivariateSpline::fit(&x, &y, 3, s)?;

        assert!(spline.knots().len() < x.len() + 4);
        if spline.status() == FitStatus::Converged {
            assert_relative_eq!(spline.residual(), s, max_relative = 1e-2);
        }
        assert_relative_eq!(spline.evaluate(2.0), 2.0_f64.sin(), epsilon = 0.1);
        Ok(())
    }

    #[test]
    fn evaluates_many() -> Result<(), SplineError> {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 2.0, 4.0];
        let spline = UnivariateSpline::fit(&x, &y, 1, 0.0)?;
        assert_eq!(spline.evaluate_many(&[0.5, 1.5]).len(), 2);
        assert_relative_eq!(spline.evaluate_many(&[0.5, 1.5])[1], 3.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            UnivariateSpline::fit(&[0.0, 1.0], &[1.0], 1, 0.0),
            Err(SplineError::LengthMismatch { .. })
        ));
        assert!(matches!(
            UnivariateSpline::fit(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0], 3, 0.0),
            Err(SplineError::TooFewPoints { .. })
        ));
        assert!(matches!(
            UnivariateSpline::fit(&[0.0, 2.0, 1.0], &[1.0, 2.0, 3.0], 1, 0.0),
            Err(SplineError::Unsorted { index: 2 })
        ));
        assert!(matches!(
            UnivariateSpline::fit(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0], 1, -1.0),
            Err(SplineError::Smoothing(_))
        ));
        assert!(matches!(
            UnivariateSpline::fit(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0], 0, 0.0),
            Err(SplineError::DegreeOutOfRange { degree: 0 })
        ));
    }
}
