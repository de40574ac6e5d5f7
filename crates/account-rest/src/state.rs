//! Application state for Axum handlers.

use account_service::AccountService;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(account_service: Arc<dyn AccountService>) -> Self {
        Self { account_service }
    }
}
