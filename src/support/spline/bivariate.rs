use super::{
    FitStatus, MAX_DEGREE, MAX_ITERATIONS, SplineError, TOLERANCE,
    bspline::{
        KnotSet, SmoothingSearch, back_substitute, basis, discontinuity_jumps, givens,
        knots_to_add, rotate,
    },
    validate_degree, validate_smoothing,
};

/// A tensor-product smoothing spline over a rectangular grid.
///
/// Data are given as values `z[i * y.len() + j]` at `(x[i], y[j])`. Knots are
/// added alternately in whichever direction promises the larger residual
/// reduction, then the smoothing parameter is tuned so that the residual sum
/// of squares matches the smoothing factor.
///
/// Queries outside the grid are clamped to its boundary.
///
/// # Example
///
/// ```
/// use twine_tube_bank::support::spline::BivariateSpline;
///
/// let x = [0.0, 1.0, 2.0, 3.0];
/// let y = [0.0, 1.0, 2.0];
/// let z: Vec<f64> = x
///     .iter()
///     .flat_map(|&xi| y.iter().map(move |&yj| xi + 2.0 * yj))
///     .collect();
///
/// let surface = BivariateSpline::fit(&x, &y, &z, [1, 1], 0.0).unwrap();
/// assert!((surface.evaluate(1.5, 0.5) - 2.5).abs() < 1e-12);
///
/// // Clamped to the grid edge at x = 3.
/// assert!((surface.evaluate(10.0, 0.0) - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BivariateSpline {
    knots: [Vec<f64>; 2],
    coefficients: Vec<f64>,
    degrees: [usize; 2],
    residual: f64,
    status: FitStatus,
}

impl BivariateSpline {
    /// Fits a smoothing surface of degrees `[kx, ky]` to gridded data.
    ///
    /// Both axes must be strictly increasing and longer than their degree,
    /// and `z` must hold `x.len() * y.len()` values in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError`] if the grid is inconsistent, a degree is outside
    /// `1..=5`, or the smoothing factor is negative.
    pub fn fit(
        x: &[f64],
        y: &[f64],
        z: &[f64],
        degrees: [usize; 2],
        smoothing: f64,
    ) -> Result<Self, SplineError> {
        let [kx, ky] = degrees;
        validate_degree(kx)?;
        validate_degree(ky)?;
        let s = validate_smoothing(smoothing)?;
        for (axis, k) in [(x, kx), (y, ky)] {
            if axis.len() <= k {
                return Err(SplineError::TooFewPoints {
                    points: axis.len(),
                    degree: k,
                });
            }
            if let Some(index) = axis.windows(2).position(|w| w[1] <= w[0]) {
                return Err(SplineError::Unsorted { index: index + 1 });
            }
        }
        if z.len() != x.len() * y.len() {
            return Err(SplineError::LengthMismatch {
                expected: x.len() * y.len(),
                actual: z.len(),
            });
        }

        Ok(Grid { x, y, z, kx, ky }.fit(s))
    }

    /// Evaluates the surface at `(x, y)`, clamped to the fitted rectangle.
    ///
    /// A NaN coordinate gives NaN.
    #[must_use]
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        if x.is_nan() || y.is_nan() {
            return f64::NAN;
        }
        let [kx, ky] = self.degrees;
        let [tx, ty] = &self.knots;
        let (lx, hx) = locate(tx, kx, x);
        let (ly, hy) = locate(ty, ky, y);
        let nky1 = ty.len() - ky - 1;

        let mut value = 0.0;
        for i in 0..=kx {
            let row = (lx - kx + i) * nky1 + ly - ky;
            for j in 0..=ky {
                value += self.coefficients[row + j] * hx[i] * hy[j];
            }
        }
        value
    }

    /// Knot vectors in the `x` and `y` directions.
    #[must_use]
    pub fn knots(&self) -> [&[f64]; 2] {
        [&self.knots[0], &self.knots[1]]
    }

    /// Coefficients in row-major order over the two bases.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    #[must_use]
    pub fn degrees(&self) -> [usize; 2] {
        self.degrees
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

    /// The rectangle covered by the fit, as `[[x_min, x_max], [y_min, y_max]]`.
    #[must_use]
    pub fn bounds(&self) -> [[f64; 2]; 2] {
        let [kx, ky] = self.degrees;
        let [tx, ty] = &self.knots;
        [
            [tx[kx], tx[tx.len() - kx - 1]],
            [ty[ky], ty[ty.len() - ky - 1]],
        ]
    }
}

/// Clamps `arg` into the knot span and returns its interval and basis values.
fn locate(t: &[f64], k: usize, arg: f64) -> (usize, [f64; MAX_DEGREE + 1]) {
    let nk1 = t.len() - k - 1;
    let arg = arg.max(t[k]).min(t[nk1]);
    let mut l = k;
    while !(arg < t[l + 1] || l == nk1 - 1) {
        l += 1;
    }
    (l, basis(t, k, arg, l))
}

/// Inserts up to `count` knots, stopping at `limit`.
///
/// Returns `true` if at least one knot was added.
fn grow(knots: &mut KnotSet, axis: &[f64], count: usize, limit: usize) -> bool {
    let before = knots.len();
    for _ in 0..count {
        if knots.len() == limit || !knots.insert(axis) {
            break;
        }
    }
    knots.len() > before
}

/// Basis values and knot-interval index of every grid coordinate.
fn observe(t: &[f64], k: usize, points: &[f64]) -> (Vec<[f64; MAX_DEGREE + 1]>, Vec<usize>) {
    let nk1 = t.len() - k - 1;
    let mut l = k;
    let mut number = 0;
    points
        .iter()
        .map(|&arg| {
            while !(arg < t[l + 1] || l == nk1 - 1) {
                l += 1;
                number += 1;
            }
            (basis(t, k, arg, l), number)
        })
        .unzip()
}

/// Least-squares (or penalized) solution on fixed knots.
struct GridFit {
    coefficients: Vec<f64>,
    residual: f64,
    /// Residual attributed to each knot interval in `x` and `y`.
    interval_residuals: [Vec<f64>; 2],
}

/// One direction of the tensor-product system.
///
/// Reduces the observation rows, and the smoothing rows when penalized,
/// against a right-hand side with `width` columns per row.
struct Direction<'a> {
    spans: &'a [[f64; MAX_DEGREE + 1]],
    numbers: &'a [usize],
    jumps: &'a [Vec<f64>],
    k: usize,
}

impl Direction<'_> {
    /// Triangularizes the direction's system.
    ///
    /// `data(it)` yields the right-hand side row for observation `it`, and
    /// `store(row, col)` locates the reduced right-hand side entries.
    /// Returns the band matrix and its final bandwidth.
    fn reduce(
        &self,
        nk1: usize,
        pinv: Option<f64>,
        width: usize,
        data: impl Fn(usize) -> Vec<f64>,
        reduced: &mut [f64],
        store: impl Fn(usize, usize) -> usize,
    ) -> (Vec<Vec<f64>>, usize) {
        let k1 = self.k + 1;
        let k2 = self.k + 2;
        let mut band = vec![vec![0.0; k2]; nk1];
        let mut bandwidth = k1;
        let mut h = [0.0; MAX_DEGREE + 2];
        let mut nrold = 0;

        for (it, &number) in self.numbers.iter().enumerate() {
            loop {
                let (base, mut right) = if nrold == number {
                    h[bandwidth - 1] = 0.0;
                    h[..k1].copy_from_slice(&self.spans[it][..k1]);
                    (number, data(it))
                } else if let Some(pinv) = pinv {
                    bandwidth = k2;
                    for (hj, &b) in h.iter_mut().zip(&self.jumps[nrold]) {
                        *hj = b * pinv;
                    }
                    (nrold, vec![0.0; width])
                } else {
                    nrold += 1;
                    continue;
                };

                for i in 0..bandwidth {
                    let piv = h[i];
                    if piv == 0.0 {
                        continue;
                    }
                    let row = base + i;
                    let (cos, sin, diagonal) = givens(piv, band[row][0]);
                    band[row][0] = diagonal;
                    for (col, value) in right.iter_mut().enumerate() {
                        let slot = store(row, col);
                        (*value, reduced[slot]) = rotate(cos, sin, *value, reduced[slot]);
                    }
                    if i == bandwidth - 1 {
                        break;
                    }
                    for j in i + 1..bandwidth {
                        (h[j], band[row][j - i]) = rotate(cos, sin, h[j], band[row][j - i]);
                    }
                }

                if nrold == number {
                    break;
                }
                nrold += 1;
            }
        }

        (band, bandwidth)
    }
}

struct Grid<'a> {
    x: &'a [f64],
    y: &'a [f64],
    z: &'a [f64],
    kx: usize,
    ky: usize,
}

impl Grid<'_> {
    fn fit(&self, s: f64) -> BivariateSpline {
        let (x, y) = (self.x, self.y);
        let (mx, my) = (x.len(), y.len());
        let nmaxx = mx + self.kx + 1;
        let nmaxy = my + self.ky + 1;
        let accuracy = TOLERANCE * s;

        let (mut tx, mut ty) = if s == 0.0 {
            (
                KnotSet::interpolating(nmaxx, self.kx, x),
                KnotSet::interpolating(nmaxy, self.ky, y),
            )
        } else {
            (
                KnotSet::polynomial(nmaxx, self.kx, mx),
                KnotSet::polynomial(nmaxy, self.ky, my),
            )
        };

        // -1 after adding knots in x, +1 after adding in y.
        let mut last_direction = 0_i8;
        let (mut nplusx, mut nplusy) = (0, 0);
        let (mut reducx, mut reducy) = (0.0, 0.0);
        let mut fp0 = 0.0;
        let mut fpold = 0.0;

        let (fit, polynomial, fpms) = loop {
            let polynomial = tx.len() == tx.minimal() && ty.len() == ty.minimal();
            tx.set_boundary(x[0], x[mx - 1]);
            ty.set_boundary(y[0], y[my - 1]);

            let fit = self.solve(&tx, &ty, None);
            let [fpx, fpy] = &fit.interval_residuals;
            tx.fpint[..fpx.len()].copy_from_slice(fpx);
            ty.fpint[..fpy.len()].copy_from_slice(fpy);
            if polynomial {
                fp0 = fit.residual;
            }

            if s == 0.0 {
                return self.finish(&tx, &ty, fit, FitStatus::Interpolating);
            }
            let fpms = fit.residual - s;
            if fpms.abs() < accuracy {
                let status = if polynomial {
                    FitStatus::LeastSquaresPolynomial
                } else {
                    FitStatus::Converged
                };
                return self.finish(&tx, &ty, fit, status);
            }
            if fpms < 0.0 {
                break (fit, polynomial, fpms);
            }
            if tx.len() == nmaxx && ty.len() == nmaxy {
                return self.finish(&tx, &ty, fit, FitStatus::Interpolating);
            }

            if last_direction < 0 {
                reducx = fpold - fit.residual;
            } else if last_direction > 0 {
                reducy = fpold - fit.residual;
            }
            fpold = fit.residual;

            let nplx = if tx.len() == tx.minimal() {
                1
            } else {
                knots_to_add(nplusx, fpms, reducx, accuracy)
            };
            let nply = if ty.len() == ty.minimal() {
                1
            } else {
                knots_to_add(nplusy, fpms, reducy, accuracy)
            };

            let mut add_x = nplx < nply || (nplx == nply && last_direction >= 0);
            if add_x && tx.len() == nmaxx {
                add_x = false;
            }
            if !add_x && ty.len() == nmaxy {
                add_x = true;
            }

            let grown = if add_x {
                last_direction = -1;
                nplusx = nplx;
                grow(&mut tx, x, nplx, nmaxx) || grow(&mut ty, y, 1, nmaxy)
            } else {
                last_direction = 1;
                nplusy = nply;
                grow(&mut ty, y, nply, nmaxy) || grow(&mut tx, x, 1, nmaxx)
            };
            if !grown {
                return self.finish(&tx, &ty, fit, FitStatus::KnotLimit);
            }
        };

        if polynomial {
            return self.finish(&tx, &ty, fit, FitStatus::LeastSquaresPolynomial);
        }

        let mut search = SmoothingSearch::new(fp0 - s, fpms, accuracy);
        let mut p = 1.0;
        let mut iteration = 0;
        loop {
            iteration += 1;
            let fit = self.solve(&tx, &ty, Some(p));
            let excess = fit.residual - s;
            if excess.abs() < accuracy {
                return self.finish(&tx, &ty, fit, FitStatus::Converged);
            }
            if iteration == MAX_ITERATIONS {
                return self.finish(&tx, &ty, fit, FitStatus::IterationLimit);
            }
            match search.next(p, excess) {
                Some(next) => p = next,
                None => return self.finish(&tx, &ty, fit, FitStatus::Stalled),
            }
        }
    }

    /// Solves the grid system on the given knots, penalized when `p` is set.
    fn solve(&self, tx: &KnotSet, ty: &KnotSet, p: Option<f64>) -> GridFit {
        let (x, y, z) = (self.x, self.y, self.z);
        let (kx, ky) = (self.kx, self.ky);
        let (mx, my) = (x.len(), y.len());
        let (tx, ty) = (tx.as_slice(), ty.as_slice());
        let (nx, ny) = (tx.len(), ty.len());
        let nk1x = nx - kx - 1;
        let nk1y = ny - ky - 1;
        let pinv = p.map(|p| 1.0 / p);

        let (spx, nrx) = observe(tx, kx, x);
        let (spy, nry) = observe(ty, ky, y);
        let jumps = |t: &[f64], n: usize, k: usize| {
            if pinv.is_some() && n != 2 * (k + 1) {
                discontinuity_jumps(t, n, k)
            } else {
                Vec::new()
            }
        };
        let bx = jumps(tx, nx, kx);
        let by = jumps(ty, ny, ky);

        // Reduce along x: rows of z become rows of q (nk1x × my).
        let mut q = vec![0.0; nk1x * my];
        let along_x = Direction {
            spans: &spx,
            numbers: &nrx,
            jumps: &bx,
            k: kx,
        };
        let (ax, ibandx) = along_x.reduce(
            nk1x,
            pinv,
            my,
            |it| z[it * my..(it + 1) * my].to_vec(),
            &mut q,
            |row, col| row * my + col,
        );

        // Reduce along y: columns of q become columns of c (nk1x × nk1y).
        let mut c = vec![0.0; nk1x * nk1y];
        let along_y = Direction {
            spans: &spy,
            numbers: &nry,
            jumps: &by,
            k: ky,
        };
        let (ay, ibandy) = along_y.reduce(
            nk1y,
            pinv,
            nk1x,
            |it| (0..nk1x).map(|j| q[j * my + it]).collect(),
            &mut c,
            |row, col| row + col * nk1y,
        );

        for i in 0..nk1x {
            let block = &mut c[i * nk1y..(i + 1) * nk1y];
            let solved = back_substitute(&ay, block, nk1y, ibandy);
            block.copy_from_slice(&solved);
        }
        for j in 0..nk1y {
            let column: Vec<f64> = (0..nk1x).map(|i| c[j + i * nk1y]).collect();
            let solved = back_substitute(&ax, &column, nk1x, ibandx);
            for (i, value) in solved.into_iter().enumerate() {
                c[j + i * nk1y] = value;
            }
        }

        let mut residual = 0.0;
        let mut fpx = vec![0.0; nx];
        let mut fpy = vec![0.0; ny];
        let mut nroldx = 0;
        for i1 in 0..mx {
            let numx = nrx[i1];
            let mut nroldy = 0;
            for i2 in 0..my {
                let numy = nry[i2];
                let mut value = 0.0;
                for l1 in 0..=kx {
                    for l2 in 0..=ky {
                        value += spx[i1][l1] * spy[i2][l2] * c[(numx + l1) * nk1y + numy + l2];
                    }
                }
                let term = (z[i1 * my + i2] - value).powi(2);
                residual += term;
                fpx[numx] += term;
                fpy[numy] += term;

                let half = term * 0.5;
                if numy != nroldy {
                    fpy[numy] -= half;
                    fpy[numy - 1] += half;
                }
                nroldy = numy;
                if numx != nroldx {
                    fpx[numx] -= half;
                    fpx[numx - 1] += half;
                }
            }
            nroldx = numx;
        }

        GridFit {
            coefficients: c,
            residual,
            interval_residuals: [fpx, fpy],
        }
    }

    fn finish(&self, tx: &KnotSet, ty: &KnotSet, fit: GridFit, status: FitStatus) -> BivariateSpline {
        BivariateSpline {
            knots: [tx.as_slice().to_vec(), ty.as_slice().to_vec()],
            coefficients: fit.coefficients,
            degrees: [self.kx, self.ky],
            residual: fit.residual,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn grid(x: &[f64], y: &[f64], f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
        x.iter()
            .flat_map(|&xi| y.iter().map(move |&yj| (xi, yj)))
            .map(|(xi, yj)| f(xi, yj))
            .collect()
    }

    #[test]
    fn bicubic_interpolation_hits_the_grid() -> Result<(), SplineError> {
        let x = [1.25, 1.5, 2.0, 3.0];
        let y = [1.25, 1.5, 2.0, 3.0];
        let z = grid(&x, &y, |a, b| (a * b).sin() + a);
        let surface = BivariateSpline::fit(&x, &y, &z, [3, 3], 0.0)?;

        assert_eq!(surface.status(), FitStatus::Interpolating);
        assert_eq!(surface.knots()[0].len(), 8);
        for (i, &xi) in x.iter().enumerate() {
            for (j, &yj) in y.iter().enumerate() {
                assert_relative_eq!(surface.evaluate(xi, yj), z[i * 4 + j], epsilon = 1e-12);
            }
        }
        Ok(())
    }

    #[test]
    fn clamps_outside_the_grid() -> Result<(), SplineError> {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.0, 0.5, 1.0];
        let z = grid(&x, &y, |a, b| a * a + b);
        let surface = BivariateSpline::fit(&x, &y, &z, [3, 1], 0.0)?;

        assert_eq!(surface.bounds(), [[0.0, 4.0], [0.0, 1.0]]);
        assert_relative_eq!(surface.evaluate(9.0, 2.0), 17.0, epsilon = 1e-10);
        assert_relative_eq!(surface.evaluate(-1.0, -1.0), 0.0, epsilon = 1e-10);
        Ok(())
    }

    #[test]
    fn nan_queries_are_not_clamped() -> Result<(), SplineError> {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 1.0];
        let z = grid(&x, &y, |a, b| a + b);
        let surface = BivariateSpline::fit(&x, &y, &z, [1, 1], 0.0)?;

        assert!(surface.evaluate(f64::NAN, 0.5).is_nan());
        assert!(surface.evaluate(0.5, f64::NAN).is_nan());
        Ok(())
    }

    #[test]
    fn smoothing_reduces_knots() -> Result<(), SplineError> {
        let x: Vec<f64> = (0..30).map(|i| f64::from(i) / 29.0).collect();
        let y = [0.0, 0.25, 0.5, 0.75, 1.0];
        let z = grid(&x, &y, |a, b| (3.0 * a).exp() * (1.0 + b));
        let s = 1e-2;
        let surface = BivariateSpline::fit(&x, &y, &z, [3, 1], s)?;

        assert!(surface.knots()[0].len() < x.len() + 4);
        assert!(surface.residual() <= s * 1.001);
        assert_relative_eq!(
            surface.evaluate(0.5, 0.5),
            1.5_f64.exp() * 1.5,
            max_relative = 1e-2
        );
        Ok(())
    }

    #[test]
    fn rejects_bad_grids() {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 1.0];
        assert!(matches!(
            BivariateSpline::fit(&x, &y, &[0.0; 5], [1, 1], 0.0),
            Err(SplineError::LengthMismatch {
                expected: 6,
                actual: 5
            })
        ));
        assert!(matches!(
            BivariateSpline::fit(&[0.0, 1.0, 1.0], &y, &[0.0; 6], [1, 1], 0.0),
            Err(SplineError::Unsorted { index: 2 })
        ));
        assert!(matches!(
            BivariateSpline::fit(&x, &y, &[0.0; 6], [1, 3], 0.0),
            Err(SplineError::TooFewPoints { .. })
        ));
    }
}
