//! Error types for the newsfeed engine
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Every failure that can terminate a fetch attempt also carries a stable
//! user-facing message via [`Error::user_message`], which is what gets
//! published on the feed channel. None of these errors are fatal to a
//! controller: the cursor is left unadvanced and the same page is retried
//! on the next trigger.

use thiserror::Error;

/// The main error type for the newsfeed engine
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Fetch Errors (the spec taxonomy)
    // ============================================================================
    /// The connectivity monitor reported no network access.
    #[error("no network connection available")]
    NoConnectivity,

    /// An I/O-level failure: connect error, timeout, interrupted transfer.
    #[error("transport failure: {message}")]
    Transport { message: String },

    /// The response arrived but could not be decoded into the wire types.
    #[error("failed to convert response: {message}")]
    Conversion { message: String },

    /// A non-success HTTP status, carrying whatever message the server sent.
    #[error("server reported failure (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// The per-request deadline elapsed before a response arrived.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a conversion error
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion {
            message: message.into(),
        }
    }

    /// Create a server error from a status code and message body
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// The stable, user-facing message for this error.
    ///
    /// This is the string published on the feed channel's Error state:
    ///
    /// - no connectivity → `"No Internet Connection"`
    /// - transport failure or timeout → `"Network Failure"`
    /// - non-success HTTP response → the server-provided message verbatim
    /// - anything else while handling a response → `"Conversion Error"`
    pub fn user_message(&self) -> String {
        match self {
            Error::NoConnectivity => "No Internet Connection".to_string(),
            Error::Transport { .. } | Error::Timeout { .. } => "Network Failure".to_string(),
            Error::Server { message, .. } => message.clone(),
            _ => "Conversion Error".to_string(),
        }
    }
}

/// Classify a `reqwest` error into the fetch taxonomy.
///
/// Errors raised while the request is on the wire (connect, timeout, body
/// transfer) are transport failures; errors raised while decoding a body
/// that did arrive are conversion failures.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Conversion {
                message: err.to_string(),
            }
        } else {
            Self::Transport {
                message: err.to_string(),
            }
        }
    }
}

/// Result type alias for the newsfeed engine
pub type Result<T> = std::result::Result<T, Error>;
