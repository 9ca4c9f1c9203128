//! Announcement records with pinning and category badges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::item::{Faceted, ItemId};

/// Badge category shown on an announcement card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AnnouncementCategory {
    Competition,
    Workshop,
    Meeting,
    Event,
    #[default]
    General,
}

impl AnnouncementCategory {
    /// Display name for the badge.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Competition => "Competition",
            Self::Workshop => "Workshop",
            Self::Meeting => "Meeting",
            Self::Event => "Event",
            Self::General => "General",
        }
    }
}

/// A club announcement. Pinned announcements render in their own group
/// ahead of the regular list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: ItemId,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub pinned: bool,
    pub category: AnnouncementCategory,
}

impl Announcement {
    /// Long-form date for the card header, e.g. `February 15, 2024`.
    pub fn formatted_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

impl Faceted for Announcement {
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
