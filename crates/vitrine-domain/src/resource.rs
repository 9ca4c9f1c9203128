//! Downloadable and external resource records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::item::{Faceted, ItemId};

/// Resource category used for the filter chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceCategory {
    Scheme,
    Syllabus,
    Documentation,
}

impl ResourceCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Scheme => "Scheme",
            Self::Syllabus => "Syllabus",
            Self::Documentation => "Documentation",
        }
    }
}

/// How the resource is delivered: a file download or an external link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Download,
    External,
}

/// A study resource card, filterable by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub category: ResourceCategory,
    pub kind: ResourceKind,
    pub url: String,
    /// Human-readable file size for downloads, e.g. `"150 KB"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub date: NaiveDate,
}

impl Faceted for Resource {
    fn id(&self) -> ItemId {
        self.id
    }

    fn dimension_value(&self, dimension: &str) -> Option<&str> {
        match dimension {
            "category" => Some(self.category.display_name()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&ResourceKind::Download).unwrap();
        assert_eq!(json, "\"download\"");
        let back: ResourceKind = serde_json::from_str("\"external\"").unwrap();
        assert_eq!(back, ResourceKind::External);
    }

    #[test]
    fn category_dimension_uses_display_name() {
        let r = Resource {
            id: 10,
            title: "3rd Semester Syllabus".into(),
            description: "Complete syllabus".into(),
            category: ResourceCategory::Syllabus,
            kind: ResourceKind::Download,
            url: "/resources/syllabus/3rd.pdf".into(),
            size: Some("200 KB".into()),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        assert_eq!(r.dimension_value("category"), Some("Syllabus"));
    }
}
