//! The content bundle: every collection in one document.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitrine_domain::{Announcement, GalleryImage, PastTeam, Project, Resource, Student};

use crate::{announcements, gallery, projects, resources, students, teams};

/// Result type alias for content loading.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors while loading an external content bundle.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the site displays, grouped per page.
///
/// Collections a bundle omits default to empty; the pages render their
/// explicit empty state rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentBundle {
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub past_teams: Vec<PastTeam>,
}

impl ContentBundle {
    /// The hand-authored built-in content.
    pub fn builtin() -> Self {
        Self {
            gallery: gallery::builtin(),
            projects: projects::builtin(),
            students: students::builtin(),
            announcements: announcements::builtin(),
            resources: resources::builtin(),
            past_teams: teams::builtin(),
        }
    }

    /// Deserialize a bundle from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and deserialize a bundle from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
