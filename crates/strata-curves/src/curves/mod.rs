//! Concrete curve types.
//!
//! - [`ConstantCurve`]: Flat zero rate, one parameter
//! - [`InterpolatedCurve`]: Zero rates at nodes, one parameter per node,
//!   optionally pinned to zero at an anchor
//! - [`DiscountFactorCurve`]: Discount factors at nodes, one parameter per node
//! - [`NelsonSiegelCurve`]: Four-parameter parametric curve
//! - [`AdditiveSpreadCurve`]: Sum or difference of component curves

mod constant;
mod discount_factor;
mod interpolated;
mod nelson_siegel;
mod spread;

pub use constant::ConstantCurve;
pub use discount_factor::{DiscountFactorCurve, SMALL_TIME};
pub use interpolated::InterpolatedCurve;
pub use nelson_siegel::NelsonSiegelCurve;
pub use spread::AdditiveSpreadCurve;
