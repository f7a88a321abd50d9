//! Transport adapter
//!
//! Issues a single HTTP request and reports either the raw response or a
//! transport-level failure. No status-code interpretation happens here;
//! that is the job of [`crate::classify`].

pub mod headers;
pub mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use thiserror::Error;

/// A request to be issued by a [`Transport`]
#[derive(Debug, Clone)]
pub struct RawRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub json_body: Option<Value>,
}

impl RawRequest {
    /// Plain GET without query parameters
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            query: Vec::new(),
            json_body: None,
        }
    }

    /// Append a query parameter
    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Attach a JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.json_body = Some(body);
        self
    }
}

/// What came back over the wire, before any interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Final request URL, used in fallback fault messages
    pub url: String,
    pub status: u16,
    pub body: String,
    pub content_type: Option<String>,
}

impl RawResponse {
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
            content_type: None,
        }
    }

    /// Whether the status is in the success range `[200, 400)`
    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.status)
    }
}

/// Failures that happen before a status code exists
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection refused, DNS failure, TLS handshake failure
    #[error("connection failed: {0}")]
    Connect(String),

    /// Request exceeded the configured timeout
    #[error("timed out: {0}")]
    Timeout(String),

    /// Any other failure while sending or reading the response
    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// Issues HTTP requests on behalf of the client
///
/// Implementations must be usable concurrently; the leaderboard fan-out
/// drives three requests through one transport at the same time.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, request: RawRequest) -> Result<RawResponse, TransportError>;
}
