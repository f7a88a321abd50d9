//! Unified error handling for the cfl crate
//!
//! Every failed JSON call ends in exactly one [`ApiFault`]. The fault is
//! derived from the HTTP status code or, when no response arrived at all,
//! from the kind of transport failure. [`Error`] wraps the fault together
//! with the handful of failures that happen before a request is sent.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cfl::error::{CflErrorTrait, ErrorCategory};
//!
//! match client.get_team(42).await {
//!     Ok(team) => println!("{}", team.name),
//!     Err(err) if err.category() == ErrorCategory::NotFound => println!("no such team"),
//!     Err(err) => eprintln!("request failed: {err}"),
//! }
//! ```

use thiserror::Error;

/// Common trait for cfl error types
pub trait CflErrorTrait: std::error::Error {
    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;

    /// Original HTTP status code, when the error carries one
    fn status(&self) -> Option<u16>;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Resource does not exist (404)
    NotFound,
    /// Credentials rejected (401, 403)
    Auth,
    /// Request rejected as invalid, or an argument outside its supported range
    Validation,
    /// Upstream failure (5xx)
    Server,
    /// Connection failures and timeouts
    Network,
    /// Payload did not match the expected schema
    Parsing,
    /// Client setup and configuration errors
    Config,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NotFound => "not found",
            Self::Auth => "authentication",
            Self::Validation => "validation",
            Self::Server => "server",
            Self::Network => "network",
            Self::Parsing => "parsing",
            Self::Config => "config",
        };
        f.write_str(name)
    }
}

/// Classified outcome of a failed API call
///
/// Constructed once per request and never mutated afterwards.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiFault {
    /// 404
    #[error("Resource not found: {message}")]
    NotFound { message: String },

    /// 401 or 403
    #[error("Authentication failed ({status}): {message}")]
    AuthFailure { status: u16, message: String },

    /// 400, and any other 4xx without a dedicated variant
    #[error("Invalid request: {message}")]
    Validation { message: String },

    /// 5xx
    #[error("Server error ({status}): {message}")]
    ServerFault { status: u16, message: String },

    /// No connection could be established
    #[error("Failed to connect: {message}")]
    ConnectionFault { message: String },

    /// The request did not complete within the configured timeout
    #[error("Request timed out: {message}")]
    TimeoutFault { message: String },
}

impl ApiFault {
    /// Human-readable message carried by every variant
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message }
            | Self::AuthFailure { message, .. }
            | Self::Validation { message }
            | Self::ServerFault { message, .. }
            | Self::ConnectionFault { message }
            | Self::TimeoutFault { message } => message,
        }
    }
}

impl CflErrorTrait for ApiFault {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::AuthFailure { .. } => ErrorCategory::Auth,
            Self::Validation { .. } => ErrorCategory::Validation,
            Self::ServerFault { .. } => ErrorCategory::Server,
            Self::ConnectionFault { .. } | Self::TimeoutFault { .. } => ErrorCategory::Network,
        }
    }

    fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::AuthFailure { status, .. } | Self::ServerFault { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Unified error type for the cfl crate
#[derive(Error, Debug)]
pub enum Error {
    /// Classified API failure
    #[error(transparent)]
    Api(#[from] ApiFault),

    /// Season or year outside the supported range; raised before any request
    #[error("Season {season} is not supported: must be between {min} and {max}")]
    SeasonOutOfRange { season: i32, min: i32, max: i32 },

    /// The body was valid JSON but did not match the resource schema
    #[error("Failed to decode {resource} payload: {source}")]
    Decode {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP client construction errors
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Scheduler creation for a blocking call failed
    #[error("Failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// The classified API fault, if this error is one
    pub fn as_fault(&self) -> Option<&ApiFault> {
        match self {
            Self::Api(fault) => Some(fault),
            _ => None,
        }
    }

    /// Whether this error belongs to the validation class
    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }
}

impl CflErrorTrait for Error {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::Api(fault) => fault.category(),
            Self::SeasonOutOfRange { .. } => ErrorCategory::Validation,
            Self::Decode { .. } => ErrorCategory::Parsing,
            Self::Http(_) | Self::Runtime(_) | Self::Config(_) => ErrorCategory::Config,
        }
    }

    fn status(&self) -> Option<u16> {
        match self {
            Self::Api(fault) => fault.status(),
            _ => None,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
