//! CheckDesk - Yew WASM admin dashboard.
//!
//! Web UI for event organizers: team statistics and a searchable,
//! sortable roster with per-team check-in toggling.

mod api;
mod app;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
