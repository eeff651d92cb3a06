//! Built-in demo roster for local development.

use registration_types::{Team, TeamLeader, TeamMember};

fn team(id: &str, name: &str, leader: &str, members: &[&str], checked: bool) -> Team {
    Team {
        id: id.to_string(),
        team_name: Some(name.to_string()),
        team_leader: Some(TeamLeader {
            name: Some(leader.to_string()),
        }),
        team_members: Some(
            members
                .iter()
                .map(|member| TeamMember {
                    name: Some(member.to_string()),
                })
                .collect(),
        ),
        is_checkedin: checked,
    }
}

/// Demo registrations loaded at startup.
pub fn demo_teams() -> Vec<Team> {
    let mut teams = vec![
        team(
            "66f0a1",
            "Null Pointers",
            "Asha Verma",
            &["Ravi Patel", "Meera Iyer"],
            true,
        ),
        team(
            "66f0a2",
            "Stack Smashers",
            "Bala Krishnan",
            &["Kiran Rao", "Divya Nair", "Arjun Menon"],
            false,
        ),
        team("66f0a3", "Bit Flippers", "Chandra Das", &["Noor Khan"], false),
        team(
            "66f0a4",
            "Segfault Society",
            "Devika Singh",
            &["Omar Sheikh", "Priya Joshi"],
            true,
        ),
        team("66f0a5", "Race Condition", "Esha Gupta", &[], false),
    ];

    // Incomplete registrations show up in production data too.
    teams.push(Team::new("66f0a6".to_string(), Some("Lone Wolf".to_string())));
    teams.push(Team {
        id: "66f0a7".to_string(),
        team_name: None,
        team_leader: None,
        team_members: Some(vec![TeamMember { name: None }]),
        is_checkedin: false,
    });

    teams
}
