//! State page to the list of sites it advertises.

use super::{ResolveContext, SiteResolver};
use npsfind_client::{canonicalize, join};
use npsfind_core::{Error, Site};

/// Lists the sites of a state. State pages are always fetched live; only the
/// per-site detail lookups go through the cache.
pub struct SiteCatalog {
    ctx: ResolveContext,
    resolver: SiteResolver,
}

impl SiteCatalog {
    pub fn new(ctx: ResolveContext) -> Result<Self, Error> {
        let resolver = SiteResolver::new(ctx.clone())?;
        Ok(Self { ctx, resolver })
    }

    /// Resolve every asset entry on the state page, in page order.
    ///
    /// Entries whose detail page lacks an address block are skipped.
    /// Duplicate entries are kept.
    ///
    /// # Errors
    ///
    /// Any fetch or parse error aborts the listing, including an asset entry
    /// with no detail link.
    pub async fn list_sites(&mut self, state_url: &str) -> Result<Vec<Site>, Error> {
        let url = canonicalize(state_url)?;
        tracing::info!(%url, "fetching state page");

        let html = self.ctx.fetcher.fetch_html(&url).await?;
        let page = self.ctx.parser.parse_state_page(&html)?;

        let mut sites = Vec::new();
        for (position, entry) in page.entries.iter().enumerate().filter(|(_, e)| e.is_asset) {
            let href = entry
                .detail_href
                .as_deref()
                .ok_or_else(|| Error::Parse(format!("{url}: asset entry {position} has no detail link")))?;
            let detail_url = join(&self.ctx.base_url, href)?;

            if let Some(site) = self.resolver.resolve(detail_url.as_str()).await? {
                sites.push(site);
            }
        }

        tracing::debug!(%url, sites = sites.len(), cached = self.resolver.cached_count(), "state listing resolved");
        Ok(sites)
    }
}
