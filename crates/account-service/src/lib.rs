//! # Account Service
//!
//! Business logic service layer for the account API.
//! Owns the validation and authorization rule set governing the four
//! account operations and the authentication check they share.

pub mod account_service;
pub mod account_service_impl;
pub mod dto;

pub use account_service::*;
pub use account_service_impl::*;
pub use dto::*;
