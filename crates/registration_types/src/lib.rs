//! Shared types for the CheckDesk check-in dashboard.
//!
//! This crate defines the wire model exchanged with the Registration
//! Service and the roster view-model used by the frontend table.

pub mod roster;

use serde::{Deserialize, Serialize};

/// A registered team as stored by the Registration Service.
///
/// The backend's documents are Mongo-flavored: the identity field is
/// `_id` and every other field may be absent. Deserialization is
/// lenient about missing fields; serialization omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Unique team identifier, stable across fetches.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Display name, if the registration form provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_leader: Option<TeamLeader>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_members: Option<Vec<TeamMember>>,
    /// Whether the team has been marked present at the event.
    #[serde(default)]
    pub is_checkedin: bool,
}

/// Leader record nested inside a team document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Member record nested inside a team document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Team {
    /// Create a team with the given id and display name.
    pub fn new(id: String, team_name: Option<String>) -> Self {
        Self {
            id,
            team_name,
            team_leader: None,
            team_members: None,
            is_checkedin: false,
        }
    }

    /// Team name, or the empty string when absent.
    pub fn name(&self) -> &str {
        self.team_name.as_deref().unwrap_or("")
    }

    /// Leader name, or the empty string when the leader or name is absent.
    pub fn leader_name(&self) -> &str {
        self.team_leader
            .as_ref()
            .and_then(|leader| leader.name.as_deref())
            .unwrap_or("")
    }

    /// Member names joined with `", "`. Missing names join as empty
    /// strings; a missing member list yields the empty string.
    pub fn member_roster(&self) -> String {
        self.team_members
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|member| member.name.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether an already lower-cased search term matches this team.
    ///
    /// A team matches when the term is a substring of its lower-cased
    /// name, leader name, or any member name. Absent fields never match.
    pub fn matches(&self, term: &str) -> bool {
        self.name().to_lowercase().contains(term)
            || self.leader_name().to_lowercase().contains(term)
            || self
                .team_members
                .as_deref()
                .unwrap_or_default()
                .iter()
                .any(|member| {
                    member
                        .name
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(term)
                })
    }
}

/// Body of `GET /checked-registrations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckedRegistrations {
    #[serde(default)]
    pub checked_in_teams: Vec<Team>,
}

/// Body of `GET /Unchecked-registrations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UncheckedRegistrations {
    #[serde(default)]
    pub unchecked_teams: Vec<Team>,
}

/// Error body returned by the Registration Service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    /// Create an error with a message only.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }

    /// Create an error with a message and a machine-readable code.
    pub fn with_code(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
        }
    }
}
