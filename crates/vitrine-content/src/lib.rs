//! vitrine-content: Hand-authored content for the showcase site.
//!
//! Every collection is an inline array of records, authored once and read
//! straight into the filter engine at startup. [`ContentBundle`] groups the
//! collections into one document that can also be deserialized from JSON,
//! so a deployment can swap the built-in content for its own file.

pub mod announcements;
pub mod bundle;
pub mod gallery;
pub mod projects;
pub mod resources;
pub mod students;
pub mod teams;

pub use bundle::*;
