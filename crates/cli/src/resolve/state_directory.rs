//! State name to state page URL mapping.

use super::ResolveContext;
use npsfind_client::join;
use npsfind_core::{CacheDomain, DomainCache, Error};
use std::collections::BTreeMap;

/// Lowercase state name -> absolute state page URL.
pub type StateUrlDict = BTreeMap<String, String>;

/// Path of the national directory page, relative to the site root.
pub const DIRECTORY_PATH: &str = "/findapark/index.htm";

/// Resolves the state directory, cached as a single unit.
pub struct StateDirectory {
    ctx: ResolveContext,
    cache: DomainCache<String>,
}

impl StateDirectory {
    /// Load the `state_url` domain and build the resolver.
    pub fn new(ctx: ResolveContext) -> Result<Self, Error> {
        let cache = ctx.store.read(CacheDomain::StateUrl)?;
        Ok(Self { ctx, cache })
    }

    /// Return the state directory, fetching it only if the cache cannot serve it.
    ///
    /// # Errors
    ///
    /// - `Error::Network` / `Error::HttpError` if the directory fetch fails
    /// - `Error::Parse` if the page has no map regions
    pub async fn build(&mut self) -> Result<StateUrlDict, Error> {
        if self.cache.is_trusted(self.ctx.freshness) {
            tracing::info!(states = self.cache.len(), "using cached state directory");
            return Ok(self.cache.entries().clone());
        }

        let url = join(&self.ctx.base_url, DIRECTORY_PATH)?;
        tracing::info!(%url, "fetching state directory");

        let html = self.ctx.fetcher.fetch_html(&url).await?;
        let page = self.ctx.parser.parse_directory(&html)?;
        if page.regions.is_empty() {
            return Err(Error::Parse(format!("{url}: no state map regions")));
        }

        let mut dict = StateUrlDict::new();
        for region in page.regions {
            let link = join(&self.ctx.base_url, &region.href)?;
            dict.insert(region.name.to_lowercase(), link.to_string());
        }

        let mut staged = self.cache.clone();
        staged.replace_all(dict.clone());
        self.ctx.store.flush(&staged)?;
        self.cache = staged;

        Ok(dict)
    }
}

/// Find the state page URL for user input such as " Michigan ".
pub fn lookup<'a>(dict: &'a StateUrlDict, input: &str) -> Option<&'a str> {
    dict.get(&input.trim().to_lowercase()).map(String::as_str)
}
