//! Places API client error types.

use std::sync::Arc;

/// Errors from the places-search API client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlacesError {
    /// No API key configured.
    #[error("missing API key: NPSFIND_PLACES_API_KEY not set")]
    MissingApiKey,

    /// Authentication failed (invalid API key).
    #[error("authentication failed: invalid API key")]
    AuthError,

    /// HTTP error response.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response body is not JSON.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for PlacesError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { PlacesError::Timeout } else { PlacesError::Network(Arc::new(err)) }
    }
}

impl From<PlacesError> for npsfind_core::Error {
    fn from(err: PlacesError) -> Self {
        use npsfind_core::Error;

        match err {
            PlacesError::MissingApiKey | PlacesError::AuthError => Error::PlacesAuth(err.to_string()),
            PlacesError::HttpError { status } => Error::HttpError(format!("places API status {status}")),
            PlacesError::Timeout | PlacesError::Network(_) => Error::Network(err.to_string()),
            PlacesError::Parse(_) => Error::Parse(err.to_string()),
        }
    }
}
