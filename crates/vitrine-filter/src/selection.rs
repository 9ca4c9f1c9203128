//! Per-dimension filter selections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vitrine_domain::Faceted;

use crate::dimension::{Dimension, ALL};

/// The chosen value for each declared dimension.
///
/// Every dimension starts at the `"All"` wildcard and changes only through
/// explicit selection; nothing here is derived from the items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    values: BTreeMap<String, String>,
}

impl FilterSelection {
    /// A selection with every dimension at `"All"`.
    pub fn new(dimensions: &[Dimension]) -> Self {
        Self {
            values: dimensions
                .iter()
                .map(|d| (d.key.clone(), ALL.to_string()))
                .collect(),
        }
    }

    /// Current value for `dimension`, if it was declared.
    pub fn value(&self, dimension: &str) -> Option<&str> {
        self.values.get(dimension).map(String::as_str)
    }

    /// Whether every dimension is at the wildcard.
    pub fn is_all(&self) -> bool {
        self.values.values().all(|v| v == ALL)
    }

    /// Reset every dimension back to `"All"`.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            *value = ALL.to_string();
        }
    }

    /// Whether `item` matches every non-wildcard dimension selection.
    ///
    /// Dimensions combine with logical AND; an item that does not carry a
    /// selected dimension matches only its wildcard.
    pub fn matches<T: Faceted>(&self, item: &T) -> bool {
        self.values.iter().all(|(dimension, value)| {
            value == ALL || item.dimension_value(dimension) == Some(value.as_str())
        })
    }

    /// Store `value` without domain validation. The public, validated path
    /// is [`Collection::set`](crate::collection::Collection::set).
    pub(crate) fn set_raw(&mut self, dimension: &str, value: &str) {
        self.values.insert(dimension.to_string(), value.to_string());
    }
}
