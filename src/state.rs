//! Shared application state passed to every handler via Axum's `State` extractor.

use std::sync::Arc;

use crate::config::Config;

/// Shared application state for the pubgate server.
///
/// There is no mutable cross-request state: every request reads the same
/// immutable configuration and writes only its own response, so cloning this
/// into each handler is the whole concurrency story.
#[derive(Clone)]
pub struct AppState {
    /// Immutable configuration loaded at startup.
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
