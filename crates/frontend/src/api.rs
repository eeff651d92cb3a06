//! HTTP client for the Registration Service.
//!
//! Every request in the app goes through this module, so the base URL
//! has exactly one configuration surface: a compile-time
//! `CHECKDESK_API_BASE` override, the local dev service in debug
//! builds, and a same-origin `/api` prefix in release builds.

use gloo_net::http::Request;
use gloo_net::Error;
use registration_types::{CheckedRegistrations, Team, UncheckedRegistrations};

fn api_base() -> &'static str {
    if let Some(base) = option_env!("CHECKDESK_API_BASE") {
        return base;
    }
    if cfg!(debug_assertions) {
        "http://localhost:5000/api"
    } else {
        "/api"
    }
}

fn endpoint(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn status_error(status: u16) -> Error {
    Error::GlooError(format!("unexpected status: {status}"))
}

/// Fetch the full roster.
///
/// Transport failures and non-2xx responses are errors; a 2xx body
/// that is not a team array is tolerated as an empty roster.
pub async fn fetch_teams() -> Result<Vec<Team>, Error> {
    let resp = Request::get(&endpoint("/registrations")).send().await?;
    if !resp.ok() {
        return Err(status_error(resp.status()));
    }
    Ok(resp.json::<Vec<Team>>().await.unwrap_or_default())
}

/// Fetch the checked-in teams for the stat widget.
pub async fn fetch_checked_in() -> Result<Vec<Team>, Error> {
    let resp = Request::get(&endpoint("/checked-registrations"))
        .send()
        .await?;
    if !resp.ok() {
        return Err(status_error(resp.status()));
    }
    Ok(resp
        .json::<CheckedRegistrations>()
        .await
        .map(|body| body.checked_in_teams)
        .unwrap_or_default())
}

/// Fetch the not-yet-checked-in teams for the stat widget.
///
/// The capital `U` in the path is the service's actual route.
pub async fn fetch_unchecked() -> Result<Vec<Team>, Error> {
    let resp = Request::get(&endpoint("/Unchecked-registrations"))
        .send()
        .await?;
    if !resp.ok() {
        return Err(status_error(resp.status()));
    }
    Ok(resp
        .json::<UncheckedRegistrations>()
        .await
        .map(|body| body.unchecked_teams)
        .unwrap_or_default())
}

/// Flip a team's check-in state on the server.
///
/// A currently checked-in team is checked out via `/checkout/{id}`;
/// anything else is checked in via `/registrations/checkin/{id}`. The
/// response body is unused.
pub async fn update_check_status(team_id: &str, currently_checked: bool) -> Result<(), Error> {
    let path = if currently_checked {
        format!("/checkout/{team_id}")
    } else {
        format!("/registrations/checkin/{team_id}")
    };

    let resp = Request::put(&endpoint(&path)).send().await?;
    if !resp.ok() {
        return Err(status_error(resp.status()));
    }
    Ok(())
}

/// Log a request failure to the browser console.
pub fn log_error(context: &str, err: &Error) {
    let message = format!("{context}: {err}");
    gloo_timers::callback::Timeout::new(0, move || {
        web_sys::console::error_1(&message.into());
    })
    .forget();
}
