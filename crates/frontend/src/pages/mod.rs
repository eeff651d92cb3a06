//! Page components.

mod teams;

pub use teams::TeamsPage;
