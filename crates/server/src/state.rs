//! Application state for the registration service.

use registration_types::Team;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    teams: Arc<RwLock<Vec<Team>>>,
}

impl AppState {
    /// Create a new app state with the given registrations.
    pub fn new(teams: Vec<Team>) -> Self {
        Self {
            teams: Arc::new(RwLock::new(teams)),
        }
    }

    /// Snapshot of every registered team.
    pub async fn all(&self) -> Vec<Team> {
        self.teams.read().await.clone()
    }

    /// Snapshot of the teams marked present.
    pub async fn checked_in(&self) -> Vec<Team> {
        self.teams
            .read()
            .await
            .iter()
            .filter(|team| team.is_checkedin)
            .cloned()
            .collect()
    }

    /// Snapshot of the teams not yet checked in.
    pub async fn unchecked(&self) -> Vec<Team> {
        self.teams
            .read()
            .await
            .iter()
            .filter(|team| !team.is_checkedin)
            .cloned()
            .collect()
    }

    /// Set a team's check-in flag, returning the updated team.
    pub async fn set_checked(&self, id: &str, checked: bool) -> Option<Team> {
        let mut teams = self.teams.write().await;
        let team = teams.iter_mut().find(|team| team.id == id)?;
        team.is_checkedin = checked;
        Some(team.clone())
    }
}
