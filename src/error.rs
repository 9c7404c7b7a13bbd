//! Error types for the MercadoPago API client.
//!
//! Provider error payloads (`{"error": "bad_request", ...}`) are *not*
//! errors at this level: they come back as
//! [`ApiResponse::Failure`](crate::models::ApiResponse) so callers can
//! inspect them. This enum covers everything else: transport failures,
//! undecodable bodies, configuration mistakes, and the one place where a
//! provider payload is elevated to a hard failure, client construction.

use thiserror::Error;

/// A specialized `Result` type for MercadoPago operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all MercadoPago client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed (connect, timeout, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The token endpoint rejected the client credentials.
    ///
    /// Only raised while constructing a client; the plain
    /// [`Authentication`](crate::auth::Authentication) calls return the
    /// provider payload instead.
    #[error("Access denied: {error}: {message}")]
    Access {
        /// Provider error code, e.g. `bad_request`
        error: String,
        /// Human-readable message from the provider
        message: String,
    },

    /// A refresh was requested but the provider never issued a refresh token
    #[error("No refresh token available for this session")]
    MissingRefreshToken,

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(err) => err.is_timeout() || err.is_connect(),
            _ => false,
        }
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Access { .. } | Error::MissingRefreshToken)
    }

    /// Build an access error from a token endpoint failure payload.
    pub(crate) fn access(error: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Access {
            error: error.into(),
            message: message.into(),
        }
    }
}
