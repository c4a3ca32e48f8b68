//! Clean and dirty parameter layouts of a curve bundle.
//!
//! A curve built on top of other curves reports its parameter sensitivity in
//! a "dirty" layout: the blocks of the curves it references first, its own
//! parameters last. The calibration parameter vector is "clean": one block
//! per solved curve holding only the parameters that curve owns. This module
//! computes both layouts for every solved curve in a bundle.
//!
//! References are resolved one level deep. A curve built on a curve that is
//! itself a spread sees only that curve's own block; the deeper curve's
//! parameters are not flattened further.

use std::collections::{HashMap, HashSet};
use std::ops::Range;

use strata_curves::{CurveBundle, CurveError, CurveResult};
use tracing::debug;

/// A slice of a curve's dirty sensitivity that belongs to another solved
/// curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnderlyingBlock {
    /// Position of the referenced curve in the layout.
    pub curve_index: usize,
    /// Start of the slice in the global dirty vector.
    pub dirty_start: usize,
    /// Length of the slice, the referenced curve's own count.
    pub len: usize,
}

/// Layout entry for one solved curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveBlock {
    name: String,
    parameter_count: usize,
    own_count: usize,
    clean_start: usize,
    dirty_start: usize,
    own_dirty_start: usize,
    underlying: Vec<UnderlyingBlock>,
}

impl CurveBlock {
    /// Returns the curve name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the curve's total parameter count, dirty layout length.
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.parameter_count
    }

    /// Returns the number of parameters this curve owns.
    #[must_use]
    pub fn own_count(&self) -> usize {
        self.own_count
    }

    /// Returns the curve's range in the clean vector.
    #[must_use]
    pub fn clean_range(&self) -> Range<usize> {
        self.clean_start..self.clean_start + self.own_count
    }

    /// Returns the curve's range in the dirty vector.
    #[must_use]
    pub fn dirty_range(&self) -> Range<usize> {
        self.dirty_start..self.dirty_start + self.parameter_count
    }

    /// Returns the range of the curve's own parameters in the dirty vector.
    #[must_use]
    pub fn own_dirty_range(&self) -> Range<usize> {
        self.own_dirty_start..self.own_dirty_start + self.own_count
    }

    /// Returns the slices owned by referenced curves, in declared order.
    #[must_use]
    pub fn underlying(&self) -> &[UnderlyingBlock] {
        &self.underlying
    }
}

/// Clean and dirty layouts for every solved curve of a bundle.
///
/// Solved curves are the bundle's curves minus the fixed ones, in bundle
/// order. A fixed curve owns no columns: where a solved curve was built on
/// it, the fixed curve's slots in the dirty vector are dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterBlockLayout {
    blocks: Vec<CurveBlock>,
    clean_len: usize,
    dirty_len: usize,
}

impl ParameterBlockLayout {
    /// Computes the layout of `curves`, excluding the curves named in `fixed`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedConfiguration` if a curve references itself or a
    /// solved curve later in bundle order, and `DimensionMismatch` if a
    /// curve's referenced blocks exceed its parameter count.
    pub fn new(curves: &CurveBundle, fixed: &HashSet<String>) -> CurveResult<Self> {
        let solved: Vec<_> = curves.iter().filter(|(name, _)| !fixed.contains(*name)).collect();
        let index: HashMap<&str, usize> = solved
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (*name, i))
            .collect();

        let mut blocks: Vec<CurveBlock> = Vec::with_capacity(solved.len());
        let mut clean_len = 0;
        let mut dirty_len = 0;

        for (i, (name, curve)) in solved.iter().enumerate() {
            let parameter_count = curve.number_of_parameters();
            let mut cursor = dirty_len;
            let mut referenced = 0;
            let mut underlying = Vec::new();

            for reference in curve.underlying_curve_names() {
                if let Some(&u) = index.get(reference.as_str()) {
                    if u >= i {
                        return Err(CurveError::unsupported(format!(
                            "curve '{name}' references '{reference}', which is not built before it"
                        )));
                    }
                    let len = blocks[u].own_count;
                    underlying.push(UnderlyingBlock {
                        curve_index: u,
                        dirty_start: cursor,
                        len,
                    });
                    cursor += len;
                    referenced += len;
                } else if let Some(fixed_curve) = curves.get(&reference) {
                    // fixed: its slots are present in the dirty vector but own no
                    // column, and they never count toward this curve's own block
                    let len = fixed_curve.number_of_parameters();
                    cursor += len;
                    referenced += len;
                }
            }

            if referenced > parameter_count {
                return Err(CurveError::dimension_mismatch(
                    format!("underlying blocks of '{name}'"),
                    parameter_count,
                    referenced,
                ));
            }
            let own_count = parameter_count - referenced;

            blocks.push(CurveBlock {
                name: (*name).to_string(),
                parameter_count,
                own_count,
                clean_start: clean_len,
                dirty_start: dirty_len,
                own_dirty_start: cursor,
                underlying,
            });
            clean_len += own_count;
            dirty_len += parameter_count;
        }

        debug!(
            curves = blocks.len(),
            fixed = fixed.len(),
            clean_len,
            dirty_len,
            "computed parameter layout"
        );

        Ok(Self {
            blocks,
            clean_len,
            dirty_len,
        })
    }

    /// Returns the per-curve blocks in bundle order.
    #[must_use]
    pub fn blocks(&self) -> &[CurveBlock] {
        &self.blocks
    }

    /// Returns the block of the named curve, if it is solved.
    #[must_use]
    pub fn block(&self, name: &str) -> Option<&CurveBlock> {
        self.blocks.iter().find(|b| b.name == name)
    }

    /// Returns the clean vector length, the number of solved parameters.
    #[must_use]
    pub fn clean_len(&self) -> usize {
        self.clean_len
    }

    /// Returns the dirty vector length.
    #[must_use]
    pub fn dirty_len(&self) -> usize {
        self.dirty_len
    }

    /// Folds a dirty vector into the clean layout.
    ///
    /// Each referenced slice is added into the referenced curve's clean
    /// block, then each curve's own slice into its own clean block.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `dirty.len()` differs from
    /// [`dirty_len`](Self::dirty_len).
    pub fn redistribute(&self, dirty: &[f64]) -> CurveResult<Vec<f64>> {
        if dirty.len() != self.dirty_len {
            return Err(CurveError::dimension_mismatch(
                "dirty sensitivity",
                self.dirty_len,
                dirty.len(),
            ));
        }

        let mut clean = vec![0.0; self.clean_len];
        for block in &self.blocks {
            for reference in &block.underlying {
                let target = self.blocks[reference.curve_index].clean_start;
                add_into(
                    &mut clean[target..target + reference.len],
                    &dirty[reference.dirty_start..reference.dirty_start + reference.len],
                );
            }
            add_into(&mut clean[block.clean_range()], &dirty[block.own_dirty_range()]);
        }
        Ok(clean)
    }
}

fn add_into(target: &mut [f64], source: &[f64]) {
    for (t, s) in target.iter_mut().zip(source) {
        *t += s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use strata_curves::curves::ConstantCurve;
    use strata_curves::generators::{ConstantGenerator, ExistingSpreadGenerator, InterpolatedGenerator};
    use strata_curves::prelude::InterpolationMethod;
    use strata_curves::CurveSetBuilder;

    /// A: 3-node curve, B: 2-node spread over A.
    fn spread_bundle() -> CurveBundle {
        CurveSetBuilder::new()
            .with_generator(
                "A",
                Arc::new(InterpolatedGenerator::new(vec![1.0, 2.0, 3.0], InterpolationMethod::Linear)),
            )
            .with_generator(
                "B",
                Arc::new(ExistingSpreadGenerator::new(
                    Arc::new(InterpolatedGenerator::new(vec![1.0, 5.0], InterpolationMethod::Linear)),
                    false,
                    "A",
                )),
            )
            .evaluate(&[0.01, 0.02, 0.03, 0.001, 0.002])
            .unwrap()
    }

    #[test]
    fn test_spread_layout() {
        let layout = ParameterBlockLayout::new(&spread_bundle(), &HashSet::new()).unwrap();

        assert_eq!(layout.clean_len(), 5);
        assert_eq!(layout.dirty_len(), 8);

        let a = layout.block("A").unwrap();
        assert_eq!(a.clean_range(), 0..3);
        assert_eq!(a.dirty_range(), 0..3);
        assert!(a.underlying().is_empty());

        let b = layout.block("B").unwrap();
        assert_eq!(b.own_count(), 2);
        assert_eq!(b.clean_range(), 3..5);
        assert_eq!(b.dirty_range(), 3..8);
        assert_eq!(
            b.underlying(),
            &[UnderlyingBlock {
                curve_index: 0,
                dirty_start: 3,
                len: 3
            }]
        );
        assert_eq!(b.own_dirty_range(), 6..8);
    }

    #[test]
    fn test_redistribute() {
        let layout = ParameterBlockLayout::new(&spread_bundle(), &HashSet::new()).unwrap();
        let dirty = [1.0, 2.0, 3.0, 10.0, 20.0, 30.0, 4.0, 5.0];

        let clean = layout.redistribute(&dirty).unwrap();

        assert_eq!(clean, vec![11.0, 22.0, 33.0, 4.0, 5.0]);
        assert!(layout.redistribute(&dirty[..7]).is_err());
    }

    #[test]
    fn test_fixed_underlying_owns_no_columns() {
        let fixed: HashSet<String> = ["A".to_string()].into_iter().collect();
        let layout = ParameterBlockLayout::new(&spread_bundle(), &fixed).unwrap();

        assert_eq!(layout.blocks().len(), 1);
        assert!(layout.block("A").is_none());
        let b = layout.block("B").unwrap();
        assert_eq!(b.own_count(), 2);
        assert_eq!(b.own_dirty_range(), 3..5);
        assert_eq!(layout.redistribute(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), vec![4.0, 5.0]);
    }

    #[test]
    fn test_internal_spread_name_collision_ignored() {
        // a solved curve named like B's internal spread component
        let curves = CurveSetBuilder::new()
            .with_generator("A", Arc::new(ConstantGenerator::new()))
            .with_generator("B-spread", Arc::new(ConstantGenerator::new()))
            .with_generator(
                "B",
                Arc::new(ExistingSpreadGenerator::new(Arc::new(ConstantGenerator::new()), false, "A")),
            )
            .evaluate(&[0.01, 0.02, 0.003])
            .unwrap();

        let layout = ParameterBlockLayout::new(&curves, &HashSet::new()).unwrap();

        assert_eq!(layout.clean_len(), 3);
        let b = layout.block("B").unwrap();
        assert_eq!(b.own_count(), 1);
        assert_eq!(b.clean_range(), 2..3);
        assert_eq!(b.underlying().len(), 1);
        assert_eq!(b.underlying()[0].curve_index, 0);
        assert_eq!(layout.redistribute(&[0.0, 0.0, 1.0, 1.0]).unwrap(), vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_forward_reference_rejected() {
        let mut known = CurveBundle::new();
        known.insert(Arc::new(ConstantCurve::new("A", 0.01)));
        let b = CurveSetBuilder::new()
            .with_generator(
                "B",
                Arc::new(ExistingSpreadGenerator::new(Arc::new(ConstantGenerator::new()), false, "A")),
            )
            .evaluate_with(&known, &[0.001])
            .unwrap();

        // B first, then a solved A: B points forward
        let mut bundle = b;
        bundle.insert(Arc::new(ConstantCurve::new("A", 0.01)));

        assert!(matches!(
            ParameterBlockLayout::new(&bundle, &HashSet::new()),
            Err(CurveError::UnsupportedConfiguration { .. })
        ));
    }
}
