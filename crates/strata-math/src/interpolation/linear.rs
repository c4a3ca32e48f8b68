//! Linear interpolation.

use crate::error::MathResult;
use crate::interpolation::{find_segment, validate_nodes, Interpolator};

/// Linear interpolation between nodes with flat extrapolation.
///
/// # Example
///
/// ```rust
/// use strata_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(vec![1.0, 2.0], vec![0.01, 0.03]).unwrap();
/// assert!((interp.interpolate(1.5).unwrap() - 0.02).abs() < 1e-12);
/// assert!((interp.interpolate(10.0).unwrap() - 0.03).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 nodes, if lengths differ,
    /// or if the nodes are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_nodes(&xs, &ys, 2)?;
        Ok(Self { xs, ys })
    }

    /// Locates x as (left node, weight on the right node).
    fn locate(&self, x: f64) -> (usize, f64) {
        let last = self.xs.len() - 1;
        if x <= self.xs[0] {
            return (0, 0.0);
        }
        if x >= self.xs[last] {
            return (last - 1, 1.0);
        }
        let i = find_segment(&self.xs, x);
        let w = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        (i, w)
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let (i, w) = self.locate(x);
        Ok((1.0 - w) * self.ys[i] + w * self.ys[i + 1])
    }

    fn node_sensitivity(&self, x: f64) -> MathResult<Vec<f64>> {
        let (i, w) = self.locate(x);
        let mut sensitivity = vec![0.0; self.xs.len()];
        sensitivity[i] = 1.0 - w;
        sensitivity[i + 1] += w;
        Ok(sensitivity)
    }

    fn nodes(&self) -> &[f64] {
        &self.xs
    }
}
