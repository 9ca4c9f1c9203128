//! Built-in project cards.

use vitrine_domain::Project;

/// The projects page as authored.
pub fn builtin() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "CyberSec CLI".into(),
            description: "AI-powered port scanner with report generation".into(),
            year: "2025".into(),
            category: "Software".into(),
            image: "https://images.club.example/projects/cybersec.png".into(),
            alt: "Terminal screenshot".into(),
            github: Some("https://github.com/club-robotics/cybersec-cli".into()),
            demo: Some("https://cybersec.club.example/".into()),
        },
        Project {
            id: 2,
            title: "Medimate".into(),
            description: "Scheduled medicine dispenser with a companion app".into(),
            year: "2025".into(),
            category: "Hardware + Software".into(),
            image: "https://images.club.example/projects/medimate.png".into(),
            alt: "Dispenser prototype".into(),
            github: Some("https://github.com/club-robotics/medimate".into()),
            demo: None,
        },
        Project {
            id: 3,
            title: "Maze Rover".into(),
            description: "Autonomous maze-solving rover on an ESP32".into(),
            year: "2024".into(),
            category: "Hardware".into(),
            image: "https://images.club.example/projects/maze-rover.png".into(),
            alt: "Rover on the maze board".into(),
            github: Some("https://github.com/club-robotics/maze-rover".into()),
            demo: None,
        },
    ]
}
