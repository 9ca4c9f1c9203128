//! Student member records.

use serde::{Deserialize, Serialize};

use crate::item::{Faceted, ItemId};

/// A student profile card, filterable by admission batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: ItemId,
    pub name: String,
    /// Admission batch, e.g. `"2022-2026"`.
    pub batch: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl Student {
    /// Initials used as the avatar fallback when the photo fails to load.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

impl Faceted for Student {
    fn id(&self) -> ItemId {
        self.id
    }

    fn dimension_value(&self, dimension: &str) -> Option<&str> {
        match dimension {
            "batch" => Some(&self.batch),
            _ => None,
        }
    }
}
