//! MapQuest radius search client.
//!
//! Finds places within a fixed radius of a postal code.
//!
//! ### API
//!
//! - **Endpoint**: `http://www.mapquestapi.com/search/v2/radius`
//! - **Authentication**: static key passed as the `key` query parameter.
//! - **Parameters**: `origin`, `radius`, `maxMatches`, `ambiguities`, `outFormat`.
//! - **Response**: JSON document with an optional `searchResults` array. The
//!   decoded document is returned untouched so it can be cached as-is.

pub mod error;
pub mod request;
pub mod response;

pub use error::PlacesError;
pub use request::{Ambiguities, OutFormat, RadiusSearchRequest};
pub use response::{Place, PlaceFields, PlacesResult};

use async_trait::async_trait;
use npsfind_core::AppConfig;
use reqwest::header;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default radius search endpoint.
const DEFAULT_BASE_URL: &str = "http://www.mapquestapi.com/search/v2/radius";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "npsfind/0.1";

/// Places API client configuration.
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    /// API key from NPSFIND_PLACES_API_KEY.
    pub api_key: String,
    /// Radius search endpoint URL.
    pub base_url: String,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string (default: npsfind/0.x).
    pub user_agent: String,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl PlacesConfig {
    /// Build from application config. Fails if no API key is configured.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, PlacesError> {
        let api_key = config.require_places_api_key().map_err(|_| PlacesError::MissingApiKey)?;

        Ok(Self {
            api_key: api_key.to_string(),
            base_url: config.places_url.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
        })
    }
}

/// A radius search backend.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    /// Run `request` and return the decoded response document.
    async fn radius_search(&self, request: &RadiusSearchRequest) -> Result<Value, PlacesError>;
}

/// HTTP client for the MapQuest radius search API.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    config: PlacesConfig,
}

impl PlacesClient {
    /// Create a new places client with the given configuration.
    pub fn new(config: PlacesConfig) -> Result<Self, PlacesError> {
        if config.api_key.trim().is_empty() {
            return Err(PlacesError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PlacesError::Network(Arc::new(e)))?;

        Ok(Self { http, config })
    }

    /// Create a new places client from application config.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, PlacesError> {
        Self::new(PlacesConfig::from_app_config(config)?)
    }
}

#[async_trait]
impl PlacesApi for PlacesClient {
    async fn radius_search(&self, request: &RadiusSearchRequest) -> Result<Value, PlacesError> {
        let start = Instant::now();
        tracing::debug!("radius search: origin={}", request.origin);

        let http_response = self
            .http
            .get(&self.config.base_url)
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, &self.config.user_agent)
            .query(&[("key", self.config.api_key.as_str())])
            .query(request)
            .send()
            .await?;

        let status = http_response.status();
        tracing::debug!("places API response status: {}", status);

        if status == 401 || status == 403 {
            return Err(PlacesError::AuthError);
        }

        if status.is_client_error() || status.is_server_error() {
            return Err(PlacesError::HttpError { status: status.as_u16() });
        }

        let bytes = http_response.bytes().await?;
        let value: Value = serde_json::from_slice(&bytes).map_err(|e| PlacesError::Parse(e.to_string()))?;

        let results = value.get("searchResults").and_then(serde_json::Value::as_array).map_or(0, Vec::len);
        tracing::debug!("radius search completed in {:?}, {} results", start.elapsed(), results);

        Ok(value)
    }
}
