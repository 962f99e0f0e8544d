//! Places around a site, cached per postal code.

use npsfind_client::{PlacesApi, PlacesError, PlacesResult, RadiusSearchRequest};
use npsfind_core::{CacheDomain, CacheStore, DomainCache, Error, Freshness, Site};
use serde_json::Value;
use std::sync::Arc;

/// Radius search client backed by the `nearby_places` domain.
///
/// `api` is optional so cached lookups work without a key; a cache miss with
/// no api fails with `Error::PlacesAuth`.
pub struct NearbyPlacesClient {
    store: CacheStore,
    cache: DomainCache<Value>,
    api: Option<Arc<dyn PlacesApi>>,
    freshness: Freshness,
}

impl NearbyPlacesClient {
    pub fn new(store: CacheStore, api: Option<Arc<dyn PlacesApi>>, freshness: Freshness) -> Result<Self, Error> {
        let cache = store.read(CacheDomain::NearbyPlaces)?;
        Ok(Self { store, cache, api, freshness })
    }

    /// Places within the fixed radius of the site's postal code.
    ///
    /// Sites sharing a postal code share one cached response. A response
    /// without a results collection is returned and cached like any other.
    pub async fn fetch(&mut self, site: &Site) -> Result<PlacesResult, Error> {
        let origin = site.zipcode();

        if let Some(raw) = self.cache.lookup(origin, self.freshness) {
            tracing::info!(origin, "using cached nearby places");
            return Ok(PlacesResult::new(raw.clone()));
        }

        let api = self.api.as_ref().ok_or(PlacesError::MissingApiKey)?;
        let request = RadiusSearchRequest::around(origin);

        tracing::info!(origin, radius = request.radius, "searching nearby places");
        let raw = api.radius_search(&request).await?;

        let mut staged = self.cache.clone();
        staged.insert(origin, raw.clone());
        self.store.flush(&staged)?;
        self.cache = staged;

        Ok(PlacesResult::new(raw))
    }
}
