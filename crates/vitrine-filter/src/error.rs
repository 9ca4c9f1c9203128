//! Error types for vitrine-filter.

use thiserror::Error;

/// Result type alias for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;

/// Errors from filter selection updates.
///
/// Chip options are generated from the same records the domains are, so an
/// out-of-domain value is a presentation-layer bug, not a user-facing
/// failure. Callers fail fast on these in development builds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The named dimension was never declared for this collection.
    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    /// The value does not appear in the dimension's domain.
    #[error("Value {value:?} is not in the domain of dimension {dimension:?}")]
    OutOfDomain { dimension: String, value: String },
}
