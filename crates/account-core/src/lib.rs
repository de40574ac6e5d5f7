//! # Account Core
//!
//! Core types, error definitions, and validation rules for the account API.
//! This crate provides the foundational abstractions used across all layers:
//! the error taxonomy, the user record entity, and the field-level
//! validation rules the service layer enforces before touching the store.

pub mod domain;
pub mod error;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use result::*;
pub use validation::*;
