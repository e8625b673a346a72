//! Error types for the Wrike API client.
//!
//! Throttling responses never show up here: the dispatcher retries them
//! until a non-throttling response arrives (or, when a retry cap is
//! configured, reports [`Error::RetriesExhausted`]). Not-found lookups are
//! not errors either; they come back as `Ok(None)`.

use thiserror::Error;

/// A specialized `Result` type for Wrike operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Wrike API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed at the network level (DNS, connect, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed, including malformed timestamps
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API answered with a non-success status other than 404
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message, taken from the body when present
        message: String,
        /// Raw response body for inspection
        body: String,
    },

    /// Authorization or token exchange failed
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The credential source cannot produce a fresh token
    #[error("Session expired; re-authorization required")]
    SessionExpired,

    /// Throttling persisted past the configured retry cap
    #[error("Gave up after {attempts} throttled attempts (last status {status})")]
    RetriesExhausted {
        /// Number of requests issued
        attempts: u32,
        /// Status of the last throttling response
        status: u16,
    },

    /// A resource object was not fetched through a client
    #[error("The resource is not attached to a client")]
    ClientUnavailable,

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Filesystem error while exporting
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried by the caller.
    ///
    /// # Example
    ///
    /// ```
    /// use wrike_rs::Error;
    ///
    /// fn handle_error(err: Error) {
    ///     if err.is_retryable() {
    ///         println!("Retrying operation...");
    ///     }
    /// }
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RetriesExhausted { .. } => true,
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Authentication(_) | Error::SessionExpired => true,
            Error::Api { status, .. } => *status == 401,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => (400..500).contains(status),
            Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// The HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } | Error::RetriesExhausted { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Create an API error from a raw status and body.
    ///
    /// Wrike error bodies look like
    /// `{"errorDescription": "...", "error": "not_found"}`.
    pub(crate) fn from_api_response(status: u16, body: String) -> Self {
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap_or_default();

        let message = parsed
            .get("errorDescription")
            .and_then(|m| m.as_str())
            .or_else(|| parsed.get("error").and_then(|e| e.as_str()))
            .unwrap_or("Unknown API error")
            .to_string();

        Error::Api {
            status,
            message,
            body,
        }
    }
}
