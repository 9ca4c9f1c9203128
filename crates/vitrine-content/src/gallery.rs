//! Built-in gallery photos.

use vitrine_domain::GalleryImage;

/// The gallery grid as authored.
pub fn builtin() -> Vec<GalleryImage> {
    vec![
        GalleryImage {
            id: 1,
            src: "https://images.club.example/gallery/techutsav.jpg".into(),
            alt: "Techutsav".into(),
            year: "2024".into(),
            category: "Events".into(),
            description: "Techutsav tech festival".into(),
        },
        GalleryImage {
            id: 2,
            src: "https://images.club.example/gallery/drone-race.jpg".into(),
            alt: "Drone race".into(),
            year: "2024".into(),
            category: "Events".into(),
            description: "Drone race finals".into(),
        },
        GalleryImage {
            id: 3,
            src: "https://images.club.example/gallery/iitb-workshop.jpg".into(),
            alt: "Workshop".into(),
            year: "2024".into(),
            category: "Workshops".into(),
            description: "Robotics workshop with Techfest IIT Bombay".into(),
        },
        GalleryImage {
            id: 4,
            src: "https://images.club.example/gallery/techutsav-team.jpg".into(),
            alt: "Team photo".into(),
            year: "2024".into(),
            category: "Events".into(),
            description: "Techutsav organizing team".into(),
        },
        GalleryImage {
            id: 5,
            src: "https://images.club.example/gallery/line-follower.jpg".into(),
            alt: "Line follower".into(),
            year: "2023".into(),
            category: "Competitions".into(),
            description: "Line follower qualifying round".into(),
        },
        GalleryImage {
            id: 6,
            src: "https://images.club.example/gallery/soldering-lab.jpg".into(),
            alt: "Soldering lab".into(),
            year: "2023".into(),
            category: "Workshops".into(),
            description: "First-year soldering lab session".into(),
        },
    ]
}
