//! Provider trait and structured error types.
//!
//! The QuoteProvider trait abstracts over the history source so the
//! orchestrator can be driven by a mock in tests and by the HTTP client in
//! production.

use thiserror::Error;

use crate::domain::QuoteRequest;

/// Structured error types for the fetch pipeline.
///
/// Every failure is a typed result surfaced to the presentation layer;
/// nothing here aborts the process.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Transport, timeout, or HTTP-status failure reaching the provider.
    #[error("network error: {0}")]
    Network(String),

    /// The callback wrapper around the payload is missing or degenerate.
    #[error("malformed response envelope: {0}")]
    Envelope(String),

    /// The wrapped body is not parseable JSON.
    #[error("invalid response JSON: {0}")]
    Json(String),

    /// The JSON parsed but its shape is not the expected payload.
    #[error("unexpected response shape: {0}")]
    Format(String),

    /// The provider answered with a non-success status code.
    #[error("provider returned status {status}")]
    Provider {
        status: String,
        message: Option<String>,
    },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("export error: {0}")]
    Export(String),
}

/// A source of raw history payloads.
///
/// Implementations perform exactly one outbound call per `fetch_raw`
/// invocation (plus any retries they are configured for) and return the
/// provider's textual response unmodified.
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch the raw response text for a request.
    fn fetch_raw(&self, req: &QuoteRequest) -> Result<String, QuoteError>;
}
