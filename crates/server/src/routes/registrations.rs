//! Registration API routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use registration_types::{ApiError, CheckedRegistrations, Team, UncheckedRegistrations};

use crate::state::AppState;

type NotFound = (StatusCode, Json<ApiError>);

/// GET /api/registrations - Full team roster.
pub async fn list_registrations(State(state): State<AppState>) -> Json<Vec<Team>> {
    Json(state.all().await)
}

/// PUT /api/registrations/checkin/:id - Mark a team present.
pub async fn check_in(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Team>, NotFound> {
    set_check_state(&state, &id, true).await
}

/// PUT /api/checkout/:id - Mark a team not present.
pub async fn check_out(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Team>, NotFound> {
    set_check_state(&state, &id, false).await
}

async fn set_check_state(state: &AppState, id: &str, checked: bool) -> Result<Json<Team>, NotFound> {
    state.set_checked(id, checked).await.map(Json).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::with_code(
                format!("Team not found: {}", id),
                "NOT_FOUND",
            )),
        )
    })
}

/// GET /api/checked-registrations - Teams marked present.
pub async fn checked_registrations(State(state): State<AppState>) -> Json<CheckedRegistrations> {
    Json(CheckedRegistrations {
        checked_in_teams: state.checked_in().await,
    })
}

/// GET /api/Unchecked-registrations - Teams not yet checked in.
pub async fn unchecked_registrations(State(state): State<AppState>) -> Json<UncheckedRegistrations> {
    Json(UncheckedRegistrations {
        unchecked_teams: state.unchecked().await,
    })
}
