//! # Account Config
//!
//! Configuration management for the account API.
//! Supports layered configuration from files and environment variables,
//! with the `PORT` variable as the externally documented override.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
