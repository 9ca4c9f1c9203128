//! Filter dimensions and their value domains.

use serde::{Deserialize, Serialize};
use vitrine_domain::Faceted;

/// The synthetic wildcard present as the first entry of every domain.
pub const ALL: &str = "All";

/// Sort order for a dimension's value domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Lexical ascending (categories, batches).
    Ascending,
    /// Lexical descending, so year-like dimensions show most recent first.
    Descending,
}

/// A named classification axis with a declared sort policy.
///
/// The sort policy is part of the declaration, never inferred from the
/// values: a page that wants years newest-first declares
/// `Dimension::descending("year")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub key: String,
    pub sort: SortOrder,
}

impl Dimension {
    pub fn ascending(key: &str) -> Self {
        Self {
            key: key.to_string(),
            sort: SortOrder::Ascending,
        }
    }

    pub fn descending(key: &str) -> Self {
        Self {
            key: key.to_string(),
            sort: SortOrder::Descending,
        }
    }
}

/// Distinct values of `dimension` across `items`, prefixed with `"All"`.
///
/// Distinctness is exact string equality. An empty item list yields just
/// `["All"]`.
pub fn domain_of<T: Faceted>(items: &[T], dimension: &Dimension) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for item in items {
        if let Some(value) = item.dimension_value(&dimension.key) {
            if !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
    }
    values.sort();
    if dimension.sort == SortOrder::Descending {
        values.reverse();
    }

    let mut domain = Vec::with_capacity(values.len() + 1);
    domain.push(ALL.to_string());
    domain.extend(values);
    domain
}
