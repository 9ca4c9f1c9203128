//! A static collection with declared dimensions and precomputed domains.

use std::collections::BTreeMap;

use vitrine_domain::Faceted;

use crate::dimension::{domain_of, Dimension, ALL};
use crate::error::{FilterError, Result};
use crate::selection::FilterSelection;
use crate::visible::{compute_visible, compute_visible_any};

/// An ordered, static list of items with its declared filter dimensions.
///
/// Items and dimension domains are fixed at construction (content is loaded
/// once and never mutated during a session); only the [`FilterSelection`]
/// passed to the query methods varies.
#[derive(Debug, Clone)]
pub struct Collection<T: Faceted> {
    items: Vec<T>,
    dimensions: Vec<Dimension>,
    domains: BTreeMap<String, Vec<String>>,
}

impl<T: Faceted> Collection<T> {
    pub fn new(items: Vec<T>, dimensions: Vec<Dimension>) -> Self {
        let domains = dimensions
            .iter()
            .map(|d| (d.key.clone(), domain_of(&items, d)))
            .collect();
        Self {
            items,
            dimensions,
            domains,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Chip options for `dimension`: `"All"` plus the distinct values in the
    /// dimension's declared sort order.
    pub fn domain(&self, dimension: &str) -> Option<&[String]> {
        self.domains.get(dimension).map(Vec::as_slice)
    }

    /// A fresh selection with every dimension at `"All"`.
    pub fn selection(&self) -> FilterSelection {
        FilterSelection::new(&self.dimensions)
    }

    /// Update `selection` for one dimension.
    ///
    /// The value must be `"All"` or a member of the dimension's domain;
    /// anything else is a caller bug reported as an error.
    pub fn set(
        &self,
        selection: &mut FilterSelection,
        dimension: &str,
        value: &str,
    ) -> Result<()> {
        let domain = self
            .domains
            .get(dimension)
            .ok_or_else(|| FilterError::UnknownDimension(dimension.to_string()))?;
        if !domain.iter().any(|v| v == value) {
            return Err(FilterError::OutOfDomain {
                dimension: dimension.to_string(),
                value: value.to_string(),
            });
        }
        selection.set_raw(dimension, value);
        Ok(())
    }

    /// Visible subsequence for `selection` (AND across dimensions).
    pub fn visible(&self, selection: &FilterSelection) -> Vec<&T> {
        compute_visible(&self.items, selection)
    }

    /// Visible subsequence for a single combined chip (OR across dimensions).
    pub fn visible_any(&self, value: &str) -> Vec<&T> {
        compute_visible_any(&self.items, &self.dimensions, value)
    }

    /// One combined chip row mixing every dimension's values: `"All"` first,
    /// then each domain's values in declaration order.
    pub fn combined_chips(&self) -> Vec<String> {
        let mut chips = vec![ALL.to_string()];
        for dimension in &self.dimensions {
            if let Some(domain) = self.domains.get(&dimension.key) {
                chips.extend(domain.iter().skip(1).cloned());
            }
        }
        chips
    }
}
