//! Reusable UI components.

mod loading;
mod registration_stats;
mod stat_card;
mod team_table;

pub use loading::Loading;
pub use registration_stats::{CheckedInCard, TotalTeamsCard, UncheckedCard};
pub use stat_card::StatCard;
pub use team_table::TeamTable;
