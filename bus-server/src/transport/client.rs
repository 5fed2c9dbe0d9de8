//! Stationboard HTTP client.
//!
//! Provides an async client for the transport.opendata.ch stationboard
//! endpoint, restricted to bus departures.

use super::error::TransportError;
use super::source::StationboardSource;
use super::types::StationboardResponse;

/// Default base URL for the transport API.
const DEFAULT_BASE_URL: &str = "http://transport.opendata.ch/v1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the transport client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL for the API (defaults to the public instance)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TransportConfig {
    /// Create a config with the defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Stationboard API client.
///
/// The upstream API is unauthenticated; the client only carries the
/// base URL and a request timeout.
#[derive(Debug, Clone)]
pub struct TransportClient {
    http: reqwest::Client,
    base_url: String,
}

impl TransportClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

impl StationboardSource for TransportClient {
    /// Get the stationboard for a stop, restricted to buses.
    ///
    /// `station` is the stop name as configured (the API resolves it to
    /// a station id). No retries: a failed request surfaces as an error
    /// and the caller decides what a missing board means.
    async fn stationboard(
        &self,
        station: &str,
        limit: u32,
    ) -> Result<StationboardResponse, TransportError> {
        let url = format!("{}/stationboard", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("station", station.to_string()),
                ("limit", limit.to_string()),
                ("transportations", "bus".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TransportError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TransportError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
