//! Built-in student profiles.

use vitrine_domain::Student;

/// The students page as authored.
pub fn builtin() -> Vec<Student> {
    vec![
        Student {
            id: 1,
            name: "Akash Choudhary".into(),
            batch: "2022-2026".into(),
            image: "https://images.club.example/students/akash.jpg".into(),
            linkedin: Some("https://linkedin.com/in/akashchoudhary".into()),
            github: Some("https://github.com/akashchoudhary".into()),
            email: Some("akash.choudhary@club.example".into()),
            resume: Some("/resumes/akash-choudhary.pdf".into()),
            certifications: vec![
                "Python for Data Science".into(),
                "Machine Learning Specialization".into(),
                "ROS Basics".into(),
            ],
        },
        Student {
            id: 2,
            name: "Arpit Koshta".into(),
            batch: "2022-2026".into(),
            image: "https://images.club.example/students/arpit.jpg".into(),
            linkedin: Some("https://linkedin.com/in/arpitkoshta".into()),
            github: Some("https://github.com/arpitkoshta".into()),
            email: Some("arpit.koshta@club.example".into()),
            resume: Some("/resumes/arpit-koshta.pdf".into()),
            certifications: vec![
                "Arduino Programming".into(),
                "IoT Fundamentals".into(),
                "Embedded Systems".into(),
            ],
        },
        Student {
            id: 3,
            name: "Nisha Verma".into(),
            batch: "2023-2027".into(),
            image: "https://images.club.example/students/nisha.jpg".into(),
            linkedin: Some("https://linkedin.com/in/nishaverma".into()),
            github: None,
            email: Some("nisha.verma@club.example".into()),
            resume: None,
            certifications: vec!["Computer Vision Basics".into()],
        },
    ]
}
