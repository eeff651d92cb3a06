//! CheckDesk registration service.
//!
//! Serves the team roster REST API consumed by the dashboard and hosts
//! the built frontend. Registrations live in memory, seeded at startup.

mod routes;
mod seed;
mod state;

use axum::{
    Router,
    routing::{get, put},
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use routes::{check_in, check_out, checked_registrations, list_registrations, unchecked_registrations};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let teams = seed::demo_teams();
    println!("Seeded {} teams", teams.len());

    let state = AppState::new(teams);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Route casing and the bare /checkout path are the wire contract
    // the dashboard was written against.
    let api_routes = Router::new()
        .route("/registrations", get(list_registrations))
        .route("/registrations/checkin/:id", put(check_in))
        .route("/checkout/:id", put(check_out))
        .route("/checked-registrations", get(checked_registrations))
        .route("/Unchecked-registrations", get(unchecked_registrations));

    let app = Router::new()
        .nest("/api", api_routes)
        // Serve static files from frontend dist (when built)
        .fallback_service(ServeDir::new("../frontend/dist").append_index_html_on_directories(true))
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 5000));
    println!("Registration service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
