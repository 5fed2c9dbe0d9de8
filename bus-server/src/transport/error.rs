//! Upstream API error types.

/// Errors that can occur when querying the stationboard API.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream rate limit hit
    #[error("rate limited by upstream API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        /// Truncated response body, for debugging.
        body: Option<String>,
    },
}
