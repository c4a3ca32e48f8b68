//! Natural cubic spline interpolation.

use crate::error::MathResult;
use crate::interpolation::{find_segment, validate_nodes, Interpolator};

/// Natural cubic spline with flat extrapolation.
///
/// "Natural" means the second derivative is zero at the end nodes. The
/// spline is linear in the node values, so the sensitivity of the second
/// derivatives to each node value is computed once at construction.
#[derive(Debug, Clone)]
pub struct NaturalCubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot
    y2s: Vec<f64>,
    /// `y2_sensitivity[k][j]` = d y2s[k] / d ys[j]
    y2_sensitivity: Vec<Vec<f64>>,
}

impl NaturalCubicSpline {
    /// Creates a natural cubic spline.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 3 nodes, if lengths differ,
    /// or if the nodes are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_nodes(&xs, &ys, 3)?;

        let n = xs.len();
        let y2s = second_derivatives(&xs, &ys);

        let mut y2_sensitivity = vec![vec![0.0; n]; n];
        let mut unit = vec![0.0; n];
        for j in 0..n {
            unit[j] = 1.0;
            let column = second_derivatives(&xs, &unit);
            for (k, value) in column.into_iter().enumerate() {
                y2_sensitivity[k][j] = value;
            }
            unit[j] = 0.0;
        }

        Ok(Self {
            xs,
            ys,
            y2s,
            y2_sensitivity,
        })
    }

    /// Returns (segment, a, b, h) for an x inside the node range.
    fn coefficients(&self, x: f64) -> (usize, f64, f64, f64) {
        let i = find_segment(&self.xs, x);
        let h = self.xs[i + 1] - self.xs[i];
        let a = (self.xs[i + 1] - x) / h;
        let b = (x - self.xs[i]) / h;
        (i, a, b, h)
    }
}

impl Interpolator for NaturalCubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let last = self.xs.len() - 1;
        if x <= self.xs[0] {
            return Ok(self.ys[0]);
        }
        if x >= self.xs[last] {
            return Ok(self.ys[last]);
        }

        let (i, a, b, h) = self.coefficients(x);
        Ok(a * self.ys[i]
            + b * self.ys[i + 1]
            + ((a * a * a - a) * self.y2s[i] + (b * b * b - b) * self.y2s[i + 1]) * (h * h)
                / 6.0)
    }

    fn node_sensitivity(&self, x: f64) -> MathResult<Vec<f64>> {
        let n = self.xs.len();
        let mut sensitivity = vec![0.0; n];
        if x <= self.xs[0] {
            sensitivity[0] = 1.0;
            return Ok(sensitivity);
        }
        if x >= self.xs[n - 1] {
            sensitivity[n - 1] = 1.0;
            return Ok(sensitivity);
        }

        let (i, a, b, h) = self.coefficients(x);
        let c_lo = (a * a * a - a) * (h * h) / 6.0;
        let c_hi = (b * b * b - b) * (h * h) / 6.0;
        for (j, s) in sensitivity.iter_mut().enumerate() {
            *s = c_lo * self.y2_sensitivity[i][j] + c_hi * self.y2_sensitivity[i + 1][j];
        }
        sensitivity[i] += a;
        sensitivity[i + 1] += b;
        Ok(sensitivity)
    }

    fn nodes(&self) -> &[f64] {
        &self.xs
    }
}

/// Computes the knot second derivatives of a natural cubic spline.
fn second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut y2s = vec![0.0; n];
    let mut u = vec![0.0; n - 1];

    for i in 1..n - 1 {
        let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
        let p = sig * y2s[i - 1] + 2.0;
        y2s[i] = (sig - 1.0) / p;
        let slope_change =
            (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]) - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
        u[i] = (6.0 * slope_change / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
    }

    y2s[n - 1] = 0.0;
    for i in (0..n - 1).rev() {
        y2s[i] = y2s[i] * y2s[i + 1] + u[i];
    }

    y2s
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_spline_through_points() {
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![0.0, 1.0, 4.0, 9.0];
        let spline = NaturalCubicSpline::new(xs.clone(), ys.clone()).unwrap();

        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(spline.interpolate(*x).unwrap(), *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_spline_reproduces_straight_line() {
        let spline =
            NaturalCubicSpline::new(vec![1.0, 2.0, 4.0, 8.0], vec![0.01, 0.02, 0.04, 0.08])
                .unwrap();

        assert_relative_eq!(spline.interpolate(3.0).unwrap(), 0.03, epsilon = 1e-12);
        assert_relative_eq!(spline.interpolate(6.5).unwrap(), 0.065, epsilon = 1e-12);
    }

    #[test]
    fn test_node_sensitivity_sums_to_one() {
        let spline =
            NaturalCubicSpline::new(vec![0.5, 1.0, 2.0, 5.0], vec![0.01, 0.02, 0.025, 0.03])
                .unwrap();

        for x in [0.7, 1.5, 3.0, 4.9] {
            let sensitivity = spline.node_sensitivity(x).unwrap();
            assert_relative_eq!(sensitivity.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_flat_extrapolation() {
        let spline =
            NaturalCubicSpline::new(vec![1.0, 2.0, 3.0], vec![0.01, 0.03, 0.02]).unwrap();

        assert_relative_eq!(spline.interpolate(0.5).unwrap(), 0.01, epsilon = 1e-12);
        assert_relative_eq!(spline.interpolate(5.0).unwrap(), 0.02, epsilon = 1e-12);
    }
}
