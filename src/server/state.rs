//! Application state shared across HTTP handlers

use crate::action_group::ActionDispatcher;
use crate::config::ServerConfig;
use std::sync::Arc;

/// HTTP server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (shared read-only)
    pub config: Arc<ServerConfig>,
    /// Dispatcher standing in for the Lambda function
    pub dispatcher: Arc<ActionDispatcher>,
}

impl AppState {
    pub fn new(config: ServerConfig, dispatcher: ActionDispatcher) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        }
    }
}
