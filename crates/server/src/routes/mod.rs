//! API route handlers.

mod registrations;

pub use registrations::*;
