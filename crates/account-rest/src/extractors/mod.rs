//! Custom Axum extractors.

pub mod credentials;

pub use credentials::*;
