//! vitrine-lightbox: Focus and navigation for item overlays.
//!
//! Every overlay on the site (gallery lightbox, student profile modal,
//! past-team modal) is the same two-state machine: `Idle` (no focus) and
//! `Focused(id)`. Stepping moves focus to the previous or next item within
//! the caller's *current* visible set, wrapping circularly at both ends.
//!
//! The machine holds no item data, only an id; the caller passes its
//! visible set into each transition, so focus can never silently outlive a
//! filter change.

pub mod error;
pub mod focus;

pub use error::*;
pub use focus::*;
