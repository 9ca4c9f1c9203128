//! Built-in study resources.

use chrono::NaiveDate;
use vitrine_domain::{Resource, ResourceCategory, ResourceKind};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid authored date")
}

fn scheme(id: u32, semester: &str, url: &str) -> Resource {
    Resource {
        id,
        title: format!("{semester} Semester Scheme"),
        description: format!("Academic scheme for {} semester students", semester.to_lowercase()),
        category: ResourceCategory::Scheme,
        kind: ResourceKind::Download,
        url: url.into(),
        size: Some("150 KB".into()),
        date: date(2024, 1, 15),
    }
}

/// The resources page as authored.
pub fn builtin() -> Vec<Resource> {
    let mut resources = vec![
        Resource {
            id: 1,
            title: "Arduino Programming Guide".into(),
            description: "Guide to Arduino programming for robotics applications".into(),
            category: ResourceCategory::Documentation,
            kind: ResourceKind::External,
            url: "https://docs.arduino.cc/programming/".into(),
            size: None,
            date: date(2024, 2, 10),
        },
        Resource {
            id: 2,
            title: "ROS Documentation".into(),
            description: "Reference documentation for ROS development".into(),
            category: ResourceCategory::Documentation,
            kind: ResourceKind::External,
            url: "https://docs.ros.org/".into(),
            size: None,
            date: date(2024, 2, 8),
        },
        Resource {
            id: 10,
            title: "3rd Semester Syllabus".into(),
            description: "Complete syllabus for the 3rd semester".into(),
            category: ResourceCategory::Syllabus,
            kind: ResourceKind::Download,
            url: "/resources/syllabus/3rd-sem.pdf".into(),
            size: Some("200 KB".into()),
            date: date(2024, 1, 15),
        },
    ];
    resources.extend([
        scheme(3, "3rd", "/resources/schemes/3rd-sem.pdf"),
        scheme(4, "4th", "/resources/schemes/4th-sem.pdf"),
        scheme(5, "5th", "/resources/schemes/5th-sem.pdf"),
        scheme(6, "6th", "/resources/schemes/6th-sem.pdf"),
    ]);
    resources
}
