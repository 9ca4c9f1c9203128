//! Error types for vitrine-lightbox.

use thiserror::Error;
use vitrine_domain::ItemId;

/// Result type alias for lightbox operations.
pub type Result<T> = std::result::Result<T, LightboxError>;

/// Caller contract violations on focus transitions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxError {
    /// `open` was called with an item outside the current visible set,
    /// typically after a stale filter change. Reported rather than accepted
    /// so a later `step` cannot misbehave; release callers may clamp to
    /// `Idle` instead of panicking.
    #[error("Item {0} is not in the current visible set")]
    NotVisible(ItemId),
}
