//! Built-in past team photos.

use vitrine_domain::PastTeam;

/// The past-teams page as authored, most recent year first.
pub fn builtin() -> Vec<PastTeam> {
    vec![
        PastTeam {
            id: 1,
            year: "2023".into(),
            image: "https://images.club.example/teams/2023.jpg".into(),
            members: vec![
                "Alex Chen - President".into(),
                "Sarah Johnson - Vice President".into(),
                "Marcus Kim - Technical Lead".into(),
                "Emily Rodriguez - Software Lead".into(),
                "David Park - Hardware Lead".into(),
            ],
            description: "Won the regional RoboCup championship and launched the \
                          first autonomous rover project."
                .into(),
        },
        PastTeam {
            id: 2,
            year: "2022".into(),
            image: "https://images.club.example/teams/2022.jpg".into(),
            members: vec![
                "Michael Chang - President".into(),
                "Jessica Liu - Vice President".into(),
                "Thomas Anderson - Technical Lead".into(),
                "Rachel Green - Software Lead".into(),
            ],
            description: "Built the club's foundation and established partnerships \
                          with local tech companies."
                .into(),
        },
        PastTeam {
            id: 3,
            year: "2021".into(),
            image: "https://images.club.example/teams/2021.jpg".into(),
            members: vec![
                "Jennifer Davis - President".into(),
                "Andrew Kim - Vice President".into(),
                "Laura Smith - Technical Lead".into(),
            ],
            description: "Developed the first virtual robotics simulation platform \
                          during the remote-learning year."
                .into(),
        },
    ]
}
