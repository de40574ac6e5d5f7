//! Axum middleware.

pub mod logging;

pub use logging::*;
