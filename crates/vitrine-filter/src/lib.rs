//! vitrine-filter: Filter engine for vitrine collections.
//!
//! Each page holds an ordered, static list of [`Faceted`] records and one or
//! more declared [`Dimension`]s. The engine derives the chip options for each
//! dimension (`"All"` plus the distinct values, in the dimension's declared
//! sort order), and computes the visible subsequence for the current
//! [`FilterSelection`]. All query functions are pure: state goes in, state
//! comes out, and the same inputs always produce the same ordered output.
//!
//! [`Faceted`]: vitrine_domain::Faceted

pub mod collection;
pub mod dimension;
pub mod error;
pub mod partition;
pub mod selection;
pub mod visible;

pub use collection::*;
pub use dimension::*;
pub use error::*;
pub use partition::*;
pub use selection::*;
pub use visible::*;
