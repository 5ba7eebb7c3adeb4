//! Application state for the web server.

use crate::config::PolishConfig;
use std::sync::Arc;

/// Shared application state: the read-only polish configuration.
///
/// Constructed once at process start and cloned into each handler. There
/// is no mutable state here — every request is independent.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PolishConfig>,
}

impl AppState {
    pub fn new(config: PolishConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
