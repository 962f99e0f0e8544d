//! Fetch-or-cache resolvers.
//!
//! Each resolver owns the in-memory mapping of its cache domain, loaded once
//! when the resolver is built, and flushes the whole domain after every
//! successful fetch. A failed fetch, parse or flush leaves the key uncached.

pub mod nearby_places;
pub mod site_catalog;
pub mod site_resolver;
pub mod state_directory;

#[cfg(test)]
pub(crate) mod testing;

pub use nearby_places::NearbyPlacesClient;
pub use site_catalog::SiteCatalog;
pub use site_resolver::SiteResolver;
pub use state_directory::{StateDirectory, StateUrlDict};

use npsfind_client::{FetchClient, FetchConfig, NpsPageParser, PageFetcher, PageParser, PlacesApi, PlacesClient};
use npsfind_core::{AppConfig, CacheStore, Error, Freshness};
use std::sync::Arc;
use url::Url;

/// Everything a resolver needs besides its own cache domain.
#[derive(Clone)]
pub struct ResolveContext {
    pub store: CacheStore,
    pub fetcher: Arc<dyn PageFetcher>,
    pub parser: Arc<dyn PageParser>,
    /// Site root that relative links are joined against.
    pub base_url: Url,
    pub freshness: Freshness,
}

/// The resolvers wired against live HTTP clients and an on-disk cache.
pub struct Resolvers {
    pub directory: StateDirectory,
    pub catalog: SiteCatalog,
    pub places: NearbyPlacesClient,
}

impl Resolvers {
    pub fn from_config(config: &AppConfig, freshness: Freshness) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url).map_err(|e| Error::InvalidUrl(e.to_string()))?;

        let ctx = ResolveContext {
            store: CacheStore::open(&config.cache_dir),
            fetcher: Arc::new(FetchClient::new(FetchConfig::from(config))?),
            parser: Arc::new(NpsPageParser::new()),
            base_url,
            freshness,
        };

        // The key is only needed once a nearby-places lookup misses the cache.
        let places_api: Option<Arc<dyn PlacesApi>> = match PlacesClient::from_app_config(config) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::info!("places lookups limited to cache: {}", e);
                None
            }
        };

        Ok(Self {
            directory: StateDirectory::new(ctx.clone())?,
            places: NearbyPlacesClient::new(ctx.store.clone(), places_api, freshness)?,
            catalog: SiteCatalog::new(ctx)?,
        })
    }
}
