//! Insertion-ordered collection of named curves.

use std::collections::HashMap;

use crate::error::{CurveError, CurveResult};
use crate::traits::SharedCurve;

/// An insertion-ordered set of curves keyed by curve name.
///
/// Curves are immutable and shared behind [`std::sync::Arc`], so cloning a
/// bundle is a cheap shallow copy: the clone can be extended without
/// touching the original, while both still point at the same curves.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use strata_curves::curves::ConstantCurve;
/// use strata_curves::CurveBundle;
///
/// let mut known = CurveBundle::new();
/// known.insert(Arc::new(ConstantCurve::new("EUR-OIS", 0.02)));
///
/// let mut merged = known.clone();
/// merged.insert(Arc::new(ConstantCurve::new("EUR-6M", 0.025)));
///
/// assert_eq!(known.len(), 1);
/// assert_eq!(merged.names().collect::<Vec<_>>(), vec!["EUR-OIS", "EUR-6M"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurveBundle {
    /// Names in insertion order
    order: Vec<String>,
    curves: HashMap<String, SharedCurve>,
}

impl CurveBundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a curve under its own name.
    ///
    /// A curve with the same name is replaced in place, keeping its
    /// original position.
    pub fn insert(&mut self, curve: SharedCurve) {
        let name = curve.name().to_string();
        if self.curves.insert(name.clone(), curve).is_none() {
            self.order.push(name);
        }
    }

    /// Adds every curve of `other`, in `other`'s order. Curves from `other`
    /// win on name collisions.
    pub fn add_all(&mut self, other: &CurveBundle) {
        for (_, curve) in other.iter() {
            self.insert(SharedCurve::clone(curve));
        }
    }

    /// Returns the curve with the given name, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SharedCurve> {
        self.curves.get(name)
    }

    /// Returns the curve with the given name.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` if no curve has that name.
    pub fn get_curve(&self, name: &str) -> CurveResult<&SharedCurve> {
        self.curves
            .get(name)
            .ok_or_else(|| CurveError::curve_not_found(name))
    }

    /// Returns true if a curve with the given name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.curves.contains_key(name)
    }

    /// Returns the curve names in insertion order.
    #[must_use]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Returns `(name, curve)` pairs in insertion order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SharedCurve)> {
        self.order
            .iter()
            .filter_map(|name| self.curves.get(name).map(|curve| (name.as_str(), curve)))
    }

    /// Returns the number of curves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the bundle holds no curves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<SharedCurve> for CurveBundle {
    fn from_iter<I: IntoIterator<Item = SharedCurve>>(iter: I) -> Self {
        let mut bundle = Self::new();
        for curve in iter {
            bundle.insert(curve);
        }
        bundle
    }
}
