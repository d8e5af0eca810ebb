//! Settings structures for ytsearch-rs configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (YTSEARCH_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("YTSEARCH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("YTSEARCH_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("YTSEARCH_RESULTS_URL") {
            self.outgoing.results_url = val;
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Upstream results page, queried with `search_query=<q>`
    pub results_url: String,
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Connection pool max idle per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            results_url: "https://www.youtube.com/results".to_string(),
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
            pool_maxsize: 10,
            verify_ssl: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.bind_address, "127.0.0.1");
        assert!(settings.outgoing.results_url.contains("youtube.com/results"));
        assert!(settings.outgoing.verify_ssl);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let settings: Settings = serde_yaml::from_str("server:\n  port: 9000\n").unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.bind_address, "127.0.0.1");
        assert_eq!(settings.outgoing.pool_maxsize, 10);
    }
}
