//! Radius search request parameters.

use serde::{Deserialize, Serialize};

/// Search radius around the origin, in miles.
pub const DEFAULT_RADIUS: u32 = 10;

/// Maximum number of matches returned.
pub const DEFAULT_MAX_MATCHES: u32 = 10;

/// Radius search parameters, serialized as the query string.
///
/// The API key is attached by the client and is not part of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiusSearchRequest {
    /// Postal code at the centre of the search.
    pub origin: String,
    pub radius: u32,
    pub max_matches: u32,
    pub ambiguities: Ambiguities,
    pub out_format: OutFormat,
}

/// How the API resolves an ambiguous origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ambiguities {
    Ignore,
}

/// Response encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutFormat {
    Json,
}

impl RadiusSearchRequest {
    /// The fixed search used for nearby places: 10 miles, 10 matches,
    /// ambiguities ignored, JSON output.
    pub fn around(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            radius: DEFAULT_RADIUS,
            max_matches: DEFAULT_MAX_MATCHES,
            ambiguities: Ambiguities::Ignore,
            out_format: OutFormat::Json,
        }
    }
}
