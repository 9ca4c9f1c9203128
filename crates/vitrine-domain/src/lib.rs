//! vitrine-domain: Content record types for the vitrine showcase suite.
//!
//! Every collection the site displays (gallery photos, projects, students,
//! announcements, resources, past team photos) is a hand-authored array of
//! these records, loaded once at startup and never mutated during a session.
//! The records expose their filterable fields through the [`Faceted`] trait;
//! everything else on them is display payload the filter engine never reads.

pub mod announcement;
pub mod gallery;
pub mod item;
pub mod loading;
pub mod project;
pub mod resource;
pub mod student;
pub mod team;

pub use announcement::*;
pub use gallery::*;
pub use item::*;
pub use loading::*;
pub use project::*;
pub use resource::*;
pub use student::*;
pub use team::*;
