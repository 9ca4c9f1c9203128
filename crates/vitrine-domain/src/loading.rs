//! Per-item image load tracking.
//!
//! Remote images load independently and fire-and-forget; completions can
//! arrive late, repeat, or never arrive. The tracker only feeds fallback
//! rendering (shimmer placeholder, initials avatar) and never touches
//! filter or focus state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// Load state of one item's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loaded,
    Errored,
}

/// Tracks image load state per item id.
///
/// The first terminal state wins: once an image is recorded as loaded or
/// errored, later callbacks for the same id are no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadTracker {
    states: BTreeMap<ItemId, LoadState>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for `id`; unknown ids are `Unloaded`.
    pub fn state(&self, id: ItemId) -> LoadState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    pub fn is_loaded(&self, id: ItemId) -> bool {
        self.state(id) == LoadState::Loaded
    }

    pub fn is_errored(&self, id: ItemId) -> bool {
        self.state(id) == LoadState::Errored
    }

    /// Record a successful load for `id`.
    pub fn mark_loaded(&mut self, id: ItemId) {
        self.states.entry(id).or_insert(LoadState::Loaded);
    }

    /// Record a failed load for `id`.
    pub fn mark_errored(&mut self, id: ItemId) {
        self.states.entry(id).or_insert(LoadState::Errored);
    }
}
