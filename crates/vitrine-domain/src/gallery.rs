//! Gallery photo records.

use serde::{Deserialize, Serialize};

use crate::item::{Faceted, ItemId};

/// A photograph in the gallery grid, filterable by year and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: ItemId,
    /// Remote image URL.
    pub src: String,
    /// Alt text for the rendered image.
    pub alt: String,
    pub year: String,
    pub category: String,
    pub description: String,
}

impl Faceted for GalleryImage {
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
