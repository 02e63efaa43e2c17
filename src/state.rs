//! Shared application state for all routes.

use crate::executor::SqlExecutor;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Created once at startup and shared by every request.
    pub executor: Arc<dyn SqlExecutor>,
}

impl AppState {
    pub fn new(executor: Arc<dyn SqlExecutor>) -> Self {
        AppState { executor }
    }
}
