//! Built-in announcements.

use chrono::NaiveDate;
use vitrine_domain::{Announcement, AnnouncementCategory};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid authored date")
}

/// The announcements page as authored, pinned items first-authored on top.
pub fn builtin() -> Vec<Announcement> {
    vec![
        Announcement {
            id: 1,
            title: "AutoCAD Training".into(),
            date: date(2024, 2, 15),
            description: "For the 2024-2028 batch".into(),
            link: Some("https://forms.club.example/autocad".into()),
            pinned: true,
            category: AnnouncementCategory::Workshop,
        },
        Announcement {
            id: 2,
            title: "Basic Electronics Training".into(),
            date: date(2024, 2, 10),
            description: "For the 2025-2029 batch".into(),
            link: None,
            pinned: true,
            category: AnnouncementCategory::Workshop,
        },
        Announcement {
            id: 3,
            title: "Data Analytics Sessions".into(),
            date: date(2024, 2, 8),
            description: "For the 2023-2027 batch; Python is a prerequisite".into(),
            link: Some("https://forms.club.example/data-analytics".into()),
            pinned: true,
            category: AnnouncementCategory::Workshop,
        },
        Announcement {
            id: 4,
            title: "Line Follower Trials".into(),
            date: date(2024, 1, 28),
            description: "Open trials for the regional line follower squad".into(),
            link: None,
            pinned: false,
            category: AnnouncementCategory::Competition,
        },
        Announcement {
            id: 5,
            title: "Weekly General Meeting".into(),
            date: date(2024, 1, 22),
            description: "Project status round and new member introductions".into(),
            link: None,
            pinned: false,
            category: AnnouncementCategory::Meeting,
        },
    ]
}
