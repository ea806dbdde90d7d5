//! B-spline building blocks shared by the univariate and bivariate fits.
//!
//! The routines follow Dierckx's FITPACK closely so that smoothing factors tuned
//! against it carry the same meaning here: Givens rotations build the banded
//! least-squares system row by row, and discontinuity jumps of the highest
//! derivative provide the smoothing term.

use super::MAX_DEGREE;

const CON1: f64 = 0.1;
const CON4: f64 = 0.04;
const CON9: f64 = 0.9;

/// Non-zero B-spline values at `x`, where `t[l] <= x < t[l + 1]`.
///
/// Only the first `k + 1` entries are meaningful.
pub(super) fn basis(t: &[f64], k: usize, x: f64, l: usize) -> [f64; MAX_DEGREE + 1] {
    let mut h = [0.0; MAX_DEGREE + 1];
    let mut hh = [0.0; MAX_DEGREE + 1];
    h[0] = 1.0;

    for j in 1..=k {
        hh[..j].copy_from_slice(&h[..j]);
        h[0] = 0.0;
        for i in 0..j {
            let li = l + i + 1;
            let lj = li - j;
            if t[li] == t[lj] {
                h[i + 1] = 0.0;
                continue;
            }
            let f = hh[i] / (t[li] - t[lj]);
            h[i] += f * (t[li] - x);
            h[i + 1] = f * (x - t[lj]);
        }
    }

    h
}

/// Givens rotation that eliminates `piv` against the diagonal entry `ww`.
///
/// Returns `(cos, sin, new_diagonal)`.
pub(super) fn givens(piv: f64, ww: f64) -> (f64, f64, f64) {
    let store = piv.abs();
    let dd = if store >= ww {
        store * (1.0 + (ww / piv).powi(2)).sqrt()
    } else {
        ww * (1.0 + (piv / ww).powi(2)).sqrt()
    };
    (ww / dd, piv / dd, dd)
}

/// Applies a Givens rotation to the pair `(a, b)`.
pub(super) fn rotate(cos: f64, sin: f64, a: f64, b: f64) -> (f64, f64) {
    (cos * a - sin * b, cos * b + sin * a)
}

/// Solves the upper-triangular banded system `a · c = z` of bandwidth `k`.
pub(super) fn back_substitute(a: &[Vec<f64>], z: &[f64], n: usize, k: usize) -> Vec<f64> {
    let mut c = vec![0.0; n];
    c[n - 1] = z[n - 1] / a[n - 1][0];

    for i in (0..n - 1).rev() {
        let band = (k - 1).min(n - 1 - i);
        let mut store = z[i];
        for l in 1..=band {
            store -= c[i + l] * a[i][l];
        }
        c[i] = store / a[i][0];
    }

    c
}

/// Discontinuity jumps of the `k`-th derivative at each interior knot.
///
/// Each row holds `k + 2` entries and is scaled so that the rows stay well
/// conditioned relative to the data rows of the observation matrix.
pub(super) fn discontinuity_jumps(t: &[f64], n: usize, k: usize) -> Vec<Vec<f64>> {
    let k1 = k + 1;
    let k2 = k + 2;
    let nk1 = n - k1;
    let fac = (nk1 - k) as f64 / (t[nk1] - t[k]);

    (k1..nk1)
        .map(|l| {
            let mut h = [0.0; 2 * (MAX_DEGREE + 1)];
            for j in 0..k1 {
                h[j] = t[l] - t[l + j - k1];
                h[j + k1] = t[l] - t[l + j + 1];
            }

            let mut lp = l - k1;
            (0..k2)
                .map(|j| {
                    let mut prod = h[j];
                    for jk in j + 1..=j + k {
                        prod *= h[jk] * fac;
                    }
                    let jump = (t[lp + k1] - t[lp]) / prod;
                    lp += 1;
                    jump
                })
                .collect()
        })
        .collect()
}

/// Knot vector under construction, with per-interval residual bookkeeping.
#[derive(Debug, Clone)]
pub(super) struct KnotSet {
    t: Vec<f64>,
    n: usize,
    degree: usize,
    /// Residual sum of squares attributed to each knot interval.
    pub(super) fpint: Vec<f64>,
    /// Number of data points strictly inside each knot interval.
    nrdata: Vec<usize>,
}

impl KnotSet {
    /// Starts from the bare polynomial: only the `2(k + 1)` boundary knots.
    pub(super) fn polynomial(capacity: usize, degree: usize, points: usize) -> Self {
        let mut nrdata = vec![0; capacity];
        nrdata[0] = points - 2;
        Self {
            t: vec![0.0; capacity],
            n: 2 * (degree + 1),
            degree,
            fpint: vec![0.0; capacity],
            nrdata,
        }
    }

    /// Places the knots of the interpolating spline through `x`.
    pub(super) fn interpolating(capacity: usize, degree: usize, x: &[f64]) -> Self {
        let mut knots = Self {
            t: vec![0.0; capacity],
            n: x.len() + degree + 1,
            degree,
            fpint: vec![0.0; capacity],
            nrdata: vec![0; capacity],
        };
        knots.place_interpolating(x);
        knots
    }

    /// Total number of knots, boundary knots included.
    pub(super) fn len(&self) -> usize {
        self.n
    }

    /// The smallest possible knot count for this degree.
    pub(super) fn minimal(&self) -> usize {
        2 * (self.degree + 1)
    }

    /// Number of knot intervals between the boundary knots.
    pub(super) fn intervals(&self) -> usize {
        self.n - self.minimal() + 1
    }

    pub(super) fn as_slice(&self) -> &[f64] {
        &self.t[..self.n]
    }

    /// Sets the `k + 1` coincident knots at each end.
    pub(super) fn set_boundary(&mut self, lower: f64, upper: f64) {
        let n = self.n;
        for j in 0..=self.degree {
            self.t[j] = lower;
            self.t[n - 1 - j] = upper;
        }
    }

    /// Replaces the interior knots with the interpolation knots for `x`.
    pub(super) fn place_interpolating(&mut self, x: &[f64]) {
        let k = self.degree;
        let half = k / 2;
        self.n = x.len() + k + 1;
        for (offset, i) in (k + 1..x.len()).enumerate() {
            let j = half + 1 + offset;
            self.t[i] = if k % 2 == 1 {
                x[j]
            } else {
                (x[j] + x[j - 1]) * 0.5
            };
        }
    }

    /// Splits the interval with the largest residual at its middle data point.
    ///
    /// Returns `false` when no interval holds an interior data point.
    pub(super) fn insert(&mut self, x: &[f64]) -> bool {
        let k = self.degree;
        let nrint = self.intervals();

        let mut fpmax = 0.0;
        let mut begin = 0;
        let mut chosen = None;
        for j in 0..nrint {
            let points = self.nrdata[j];
            if fpmax < self.fpint[j] && points != 0 {
                fpmax = self.fpint[j];
                chosen = Some((j, points, begin));
            }
            begin += points + 1;
        }
        let Some((number, points, first)) = chosen else {
            return false;
        };

        let half = points / 2 + 1;
        let next = number + 1;
        for jj in (next..nrint).rev() {
            self.fpint[jj + 1] = self.fpint[jj];
            self.nrdata[jj + 1] = self.nrdata[jj];
            self.t[jj + k + 1] = self.t[jj + k];
        }
        self.nrdata[number] = half - 1;
        self.nrdata[next] = points - half;
        self.fpint[number] = fpmax * self.nrdata[number] as f64 / points as f64;
        self.fpint[next] = fpmax * self.nrdata[next] as f64 / points as f64;
        self.t[next + k] = x[first + half];
        self.n += 1;
        true
    }
}

/// Number of knots to add next, extrapolated from the last residual reduction.
pub(super) fn knots_to_add(previous: usize, excess: f64, reduction: f64, accuracy: f64) -> usize {
    let mut estimate = previous * 2;
    if reduction > accuracy {
        estimate = (previous as f64 * excess / reduction) as usize;
    }
    (previous * 2).min(estimate.max(previous / 2).max(1))
}

/// Search for the smoothing parameter `p` at which the residual matches the
/// smoothing factor.
///
/// Keeps a bracket `(p1, f1)`, `(p3, f3)` around the root of
/// `f(p) = residual(p) - smoothing` and refines it by rational interpolation.
#[derive(Debug, Clone)]
pub(super) struct SmoothingSearch {
    accuracy: f64,
    p1: f64,
    f1: f64,
    p3: f64,
    f3: f64,
    lower_bracketed: bool,
    upper_bracketed: bool,
}

impl SmoothingSearch {
    /// `f0` is the excess residual of the least-squares polynomial and `fpms`
    /// that of the least-squares spline on the final knots.
    pub(super) fn new(f0: f64, fpms: f64, accuracy: f64) -> Self {
        Self {
            accuracy,
            p1: 0.0,
            f1: f0,
            p3: -1.0,
            f3: fpms,
            lower_bracketed: false,
            upper_bracketed: false,
        }
    }

    /// Proposes the next `p` given the excess residual `f2` at `p2`.
    ///
    /// Returns `None` when the residual is no longer monotone in `p`.
    pub(super) fn next(&mut self, p2: f64, f2: f64) -> Option<f64> {
        let acc = self.accuracy;

        if !self.upper_bracketed {
            if f2 - self.f3 <= acc {
                self.p3 = p2;
                self.f3 = f2;
                let mut p = p2 * CON4;
                if p <= self.p1 {
                    p = self.p1 * CON9 + p2 * CON1;
                }
                return Some(p);
            }
            if f2 < 0.0 {
                self.upper_bracketed = true;
            }
        }

        if !self.lower_bracketed {
            if self.f1 - f2 <= acc {
                self.p1 = p2;
                self.f1 = f2;
                let mut p = p2 / CON4;
                if self.p3 >= 0.0 && p >= self.p3 {
                    p = p2 * CON1 + self.p3 * CON9;
                }
                return Some(p);
            }
            if f2 > 0.0 {
                self.lower_bracketed = true;
            }
        }

        if f2 >= self.f1 || f2 <= self.f3 {
            return None;
        }

        Some(self.interpolate(p2, f2))
    }

    /// Rational interpolation through the three points, then bracket update.
    fn interpolate(&mut self, p2: f64, f2: f64) -> f64 {
        let (p1, f1, p3, f3) = (self.p1, self.f1, self.p3, self.f3);
        let p = if p3 > 0.0 {
            let h1 = f1 * (f2 - f3);
            let h2 = f2 * (f3 - f1);
            let h3 = f3 * (f1 - f2);
            -(p1 * p2 * h3 + p2 * p3 * h1 + p3 * p1 * h2) / (p1 * h1 + p2 * h2 + p3 * h3)
        } else {
            (p1 * (f1 - f3) * f2 - p2 * (f2 - f3) * f1) / ((f1 - f2) * f3)
        };

        if f2 < 0.0 {
            self.p3 = p2;
            self.f3 = f2;
        } else {
            self.p1 = p2;
            self.f1 = f2;
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn basis_is_a_partition_of_unity() {
        let t = [0.0, 0.0, 0.0, 0.0, 0.3, 0.7, 1.0, 1.0, 1.0, 1.0];
        for (x, l) in [(0.1, 3), (0.5, 4), (0.95, 5)] {
            let h = basis(&t, 3, x, l);
            assert_relative_eq!(h[..4].iter().sum::<f64>(), 1.0, epsilon = 1e-14);
            assert!(h[..4].iter().all(|&v| v >= 0.0));
        }
    }

    #[test]
    fn linear_basis_is_hat_function() {
        let t = [0.0, 0.0, 1.0, 2.0, 2.0];
        let h = basis(&t, 1, 0.25, 1);
        assert_relative_eq!(h[0], 0.75);
        assert_relative_eq!(h[1], 0.25);
    }

    #[test]
    fn givens_zeroes_the_pivot() {
        let (cos, sin, dd) = givens(3.0, 4.0);
        assert_relative_eq!(dd, 5.0);
        let (_, eliminated) = rotate(cos, sin, 3.0, 4.0);
        assert_relative_eq!(eliminated, 5.0);
        assert_relative_eq!(cos * 3.0 - sin * 4.0, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn banded_back_substitution() {
        let a = vec![vec![2.0, 1.0], vec![4.0, 1.0], vec![5.0, 0.0]];
        let c = back_substitute(&a, &[4.0, 9.0, 10.0], 3, 2);
        assert_relative_eq!(c[2], 2.0);
        assert_relative_eq!(c[1], 1.75);
        assert_relative_eq!(c[0], 1.125);
    }

    #[test]
    fn interpolation_knots_for_cubic() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let mut knots = KnotSet::interpolating(10, 3, &x);
        knots.set_boundary(0.0, 5.0);
        assert_eq!(
            knots.as_slice(),
            &[0.0, 0.0, 0.0, 0.0, 2.0, 3.0, 5.0, 5.0, 5.0, 5.0]
        );
    }

    #[test]
    fn insertion_splits_the_worst_interval() {
        let x: Vec<f64> = (0..9).map(f64::from).collect();
        let mut knots = KnotSet::polynomial(12, 1, x.len());
        knots.set_boundary(0.0, 8.0);
        knots.fpint[0] = 1.0;

        assert!(knots.insert(&x));
        knots.set_boundary(0.0, 8.0);
        assert_eq!(knots.as_slice(), &[0.0, 0.0, 4.0, 8.0, 8.0]);
        assert_eq!(knots.nrdata[..2], [3_usize, 3]);
        assert_relative_eq!(knots.fpint[0], 3.0 / 7.0);
        assert_relative_eq!(knots.fpint[1], 3.0 / 7.0);
    }

    #[test]
    fn knot_growth_is_bounded() {
        assert_eq!(knots_to_add(1, 10.0, 0.0, 1e-3), 2);
        assert_eq!(knots_to_add(4, 1.0, 10.0, 1e-3), 2);
        assert_eq!(knots_to_add(1, 1.0, 10.0, 1e-3), 1);
    }
}
