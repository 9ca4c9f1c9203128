//! Student project records.

use serde::{Deserialize, Serialize};

use crate::item::{Faceted, ItemId};

/// A club project card, filterable by year and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub year: String,
    pub category: String,
    pub image: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

impl Faceted for Project {
    fn id(&self) -> ItemId {
        self.id
    }

    fn dimension_value(&self, dimension: &str) -> Option<&str> {
        match dimension {
            "year" => Some(&self.year),
            "category" => Some(&self.category),
            _ => None,
        }
    }
}
