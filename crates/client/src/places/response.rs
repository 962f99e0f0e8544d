//! Typed view over a raw radius search response.
//!
//! The raw decoded document is what gets cached; this module only reads the
//! fields nearby-places output needs.

use serde::Deserialize;
use serde_json::Value;

/// Key of the optional results collection.
const RESULTS_KEY: &str = "searchResults";

/// A decoded radius search response.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacesResult {
    raw: Value,
}

/// One matched place.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(default)]
    pub fields: PlaceFields,
}

/// Descriptive fields of a place; any of them may be absent or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlaceFields {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub group_sic_code_name: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl PlaceFields {
    pub fn address(&self) -> Option<&str> {
        non_empty(&self.address)
    }

    pub fn city(&self) -> Option<&str> {
        non_empty(&self.city)
    }

    /// Business category, e.g. "Restaurants".
    pub fn category(&self) -> Option<&str> {
        non_empty(&self.group_sic_code_name)
    }
}

impl PlacesResult {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// The document as returned by the API.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Whether the response carries a results collection at all.
    pub fn has_results(&self) -> bool {
        self.raw.get(RESULTS_KEY).is_some_and(Value::is_array)
    }

    /// Matched places in response order. Results that do not decode are skipped.
    pub fn places(&self) -> Vec<Place> {
        let Some(results) = self.raw.get(RESULTS_KEY).and_then(Value::as_array) else {
            return Vec::new();
        };

        results
            .iter()
            .filter_map(|item| match Place::deserialize(item) {
                Ok(place) => Some(place),
                Err(e) => {
                    tracing::warn!("skipping malformed place result: {}", e);
                    None
                }
            })
            .collect()
    }
}
