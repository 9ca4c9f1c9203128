//! Past team photo records.

use serde::{Deserialize, Serialize};

use crate::item::{Faceted, ItemId};

/// A group photo of one year's team, with the member roster.
///
/// The past-teams page shows the full list unfiltered; the year dimension
/// is still declared so the lightbox can run over the same machinery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastTeam {
    pub id: ItemId,
    pub year: String,
    pub image: String,
    /// `"Name - Role"` lines as authored.
    pub members: Vec<String>,
    pub description: String,
}

impl Faceted for PastTeam {
    fn id(&self) -> ItemId {
        self.id
    }

    fn dimension_value(&self, dimension: &str) -> Option<&str> {
        match dimension {
            "year" => Some(&self.year),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_is_a_dimension() {
        let team = PastTeam {
            id: 1,
            year: "2023".into(),
            image: String::new(),
            members: vec!["Alex Chen - President".into()],
            description: "Breakthrough year".into(),
        };
        assert_eq!(team.dimension_value("year"), Some("2023"));
        assert_eq!(team.dimension_value("category"), None);
    }
}
