//! Application state shared across handlers

use crate::config::Settings;
use crate::network::HttpClient;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Upstream HTTP client
    pub client: HttpClient,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, client: HttpClient) -> Self {
        Self {
            settings: Arc::new(settings),
            client,
        }
    }
}
