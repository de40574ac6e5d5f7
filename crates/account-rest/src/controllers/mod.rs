//! REST API controllers.

pub mod account_controller;
pub mod health_controller;
pub mod user_controller;
