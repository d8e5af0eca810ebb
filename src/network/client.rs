//! HTTP client for fetching the upstream results page

use super::user_agent::{accept_html, accept_language, generate_user_agent};
use crate::config::OutgoingSettings;
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

/// reqwest wrapper configured to look like a regular browser.
///
/// YouTube serves a consent interstitial or a degraded page to clients it
/// does not recognize; a realistic User-Agent plus the `CONSENT=YES+`
/// cookie gets the normal results markup.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    results_url: String,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .brotli(true);

        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
            results_url: settings.results_url.clone(),
            user_agent: generate_user_agent(),
        })
    }

    /// Fetch the HTML of the results page for a query.
    ///
    /// Transport and HTTP-status failures propagate to the caller; deciding
    /// how to report them is the handler's job, not ours.
    pub async fn search_page(&self, query: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.results_url)
            .query(&[("search_query", query)])
            .header("User-Agent", &self.user_agent)
            .header("Accept", accept_html())
            .header("Accept-Language", accept_language("en"))
            .header("Cookie", "CONSENT=YES+")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("upstream returned HTTP {}", status.as_u16());
        }

        Ok(response.text().await?)
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_carries_realistic_user_agent() {
        let client = HttpClient::new().unwrap();
        assert!(client.user_agent().starts_with("Mozilla/5.0"));
    }
}
