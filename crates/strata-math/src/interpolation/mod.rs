//! Node interpolation for interpolated yield curves.
//!
//! Interpolated curves store one rate per node and need two things from an
//! interpolator: the value between nodes, and how that value moves when a
//! single node value moves. The second is what turns a point sensitivity
//! into a sensitivity to curve parameters.
//!
//! # Available Methods
//!
//! - [`LinearInterpolator`]: Piecewise linear between nodes
//! - [`NaturalCubicSpline`]: C2 natural cubic spline
//!
//! Both extrapolate flat beyond the first and last node.

mod cubic_spline;
mod linear;

pub use cubic_spline::NaturalCubicSpline;
pub use linear::LinearInterpolator;

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Trait for node interpolators.
pub trait Interpolator: Send + Sync + std::fmt::Debug {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the sensitivity of the interpolated value at x to each node
    /// value, in node order.
    fn node_sensitivity(&self, x: f64) -> MathResult<Vec<f64>>;

    /// Returns the node abscissas.
    fn nodes(&self) -> &[f64];

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64 {
        self.nodes().first().copied().unwrap_or(0.0)
    }

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64 {
        self.nodes().last().copied().unwrap_or(0.0)
    }

    /// Checks if x is within the node range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Interpolation method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InterpolationMethod {
    /// Linear interpolation on node values.
    #[default]
    Linear,

    /// Natural cubic spline on node values.
    NaturalCubic,
}

impl InterpolationMethod {
    /// Minimum number of nodes the method needs.
    #[must_use]
    pub fn min_nodes(&self) -> usize {
        match self {
            Self::Linear => 2,
            Self::NaturalCubic => 3,
        }
    }

    /// Builds an interpolator over the given nodes and values.
    pub fn build(&self, xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Box<dyn Interpolator>> {
        Ok(match self {
            Self::Linear => Box::new(LinearInterpolator::new(xs, ys)?),
            Self::NaturalCubic => Box::new(NaturalCubicSpline::new(xs, ys)?),
        })
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::NaturalCubic => write!(f, "NaturalCubic"),
        }
    }
}

/// Checks node data shared by every interpolator.
pub(crate) fn validate_nodes(xs: &[f64], ys: &[f64], required: usize) -> MathResult<()> {
    if xs.len() < required {
        return Err(MathError::insufficient_data(required, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.windows(2).any(|w| w[1] <= w[0]) {
        return Err(MathError::invalid_input(
            "x values must be strictly increasing",
        ));
    }
    if xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return Err(MathError::invalid_input("node data must be finite"));
    }
    Ok(())
}

/// Finds the index i such that xs[i] <= x < xs[i+1], clamped to the last segment.
pub(crate) fn find_segment(xs: &[f64], x: f64) -> usize {
    let last = xs.len() - 2;
    match xs.binary_search_by(|node| node.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)) {
        Ok(i) => i.min(last),
        Err(i) => i.saturating_sub(1).min(last),
    }
}
