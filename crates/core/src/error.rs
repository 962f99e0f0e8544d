//! Unified error types for npsfind.
//!
//! Display strings carry a stable code prefix so the CLI boundary can report
//! them without matching on variants.

/// Unified error types for the resolution pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection or timeout failure on a fetch.
    #[error("NETWORK_ERROR: {0}")]
    Network(String),

    /// HTTP error response.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),

    /// An expected structural element is missing from a page or response.
    #[error("PARSE_ERROR: {0}")]
    Parse(String),

    /// Stored cache bytes failed to decode as the domain's shape.
    #[error("CACHE_CORRUPT: {domain}: {reason}")]
    CacheCorrupt { domain: String, reason: String },

    /// Filesystem failure while loading or storing a cache document.
    #[error("CACHE_ERROR: {0}")]
    CacheIo(#[from] std::io::Error),

    /// Invalid URL.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// Places API key missing or rejected.
    #[error("PLACES_AUTH_ERROR: {0}")]
    PlacesAuth(String),
}
