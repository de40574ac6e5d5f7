//! # Account REST
//!
//! REST API layer using Axum for the account API.
//! Provides the signup, profile, and account-closure endpoints plus a
//! health check, with HTTP Basic authentication on the protected routes.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
