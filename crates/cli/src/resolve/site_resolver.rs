//! Site detail page to `Site` record.

use super::ResolveContext;
use npsfind_client::{SitePage, canonicalize};
use npsfind_core::{CacheDomain, DomainCache, Error, Site};
use url::Url;

/// Resolves site detail URLs, cached per canonical URL.
pub struct SiteResolver {
    ctx: ResolveContext,
    cache: DomainCache<Site>,
}

impl SiteResolver {
    /// Load the `site_detail` domain and build the resolver.
    pub fn new(ctx: ResolveContext) -> Result<Self, Error> {
        let cache = ctx.store.read(CacheDomain::SiteDetail)?;
        Ok(Self { ctx, cache })
    }

    /// Resolve one detail page.
    ///
    /// Returns `Ok(None)` when the page has no structured address block; such
    /// sites are not cached. A missing title block or telephone field is a
    /// parse error.
    pub async fn resolve(&mut self, site_url: &str) -> Result<Option<Site>, Error> {
        let url = canonicalize(site_url)?;

        if let Some(site) = self.cache.lookup(url.as_str(), self.ctx.freshness) {
            tracing::info!(%url, "using cached site detail");
            return Ok(Some(site.clone()));
        }

        tracing::info!(%url, "fetching site detail");
        let html = self.ctx.fetcher.fetch_html(&url).await?;
        let page = self.ctx.parser.parse_site_page(&html)?;

        let Some(site) = site_from_page(page, &url)? else {
            tracing::warn!(%url, "no address block, dropping site");
            return Ok(None);
        };

        let mut staged = self.cache.clone();
        staged.insert(url.as_str(), site.clone());
        self.ctx.store.flush(&staged)?;
        self.cache = staged;

        Ok(Some(site))
    }

    /// Number of sites currently cached.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }
}

fn site_from_page(page: SitePage, url: &Url) -> Result<Option<Site>, Error> {
    let title = page.title.ok_or_else(|| Error::Parse(format!("{url}: missing title block")))?;

    let Some(address) = page.address else {
        return Ok(None);
    };

    let phone = page.telephone.ok_or_else(|| Error::Parse(format!("{url}: missing telephone")))?;

    Ok(Some(Site::new(
        title.category,
        title.name,
        &address.city,
        &address.region,
        &address.postal_code,
        phone.trim(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::testing::{FakeFetcher, FakeParser, addressless_page, context, site_page};
    use npsfind_client::{AddressBlock, TitleBlock};
    use npsfind_core::Freshness;
    use std::sync::Arc;

    const ISRO_URL: &str = "https://www.nps.gov/isro/index.htm";
    const NOJO_URL: &str = "https://www.nps.gov/noco/index.htm";

    fn isro_page() -> SitePage {
        site_page("Isle Royale", "National Park", "Houghton", " MI ", "\n 49931-1869 ", "(906) 482-0984")
    }

    #[tokio::test]
    async fn test_resolve_composes_address_and_trims_zip() {
        let fetcher = Arc::new(FakeFetcher::new());
        let parser = FakeParser::new().with_site(ISRO_URL, isro_page());
        let mut resolver = SiteResolver::new(context(fetcher, parser, Freshness::Forever)).unwrap();

        let site = resolver.resolve(ISRO_URL).await.unwrap().unwrap();

        assert_eq!(site.name(), "Isle Royale");
        assert_eq!(site.category(), "National Park");
        assert_eq!(site.address(), "Houghton, MI");
        assert_eq!(site.zipcode(), "49931-1869");
        assert_eq!(site.phone(), "(906) 482-0984");
    }

    #[tokio::test]
    async fn test_resolve_caches_by_canonical_url() {
        let fetcher = Arc::new(FakeFetcher::new());
        let parser = FakeParser::new().with_site(ISRO_URL, isro_page());
        let ctx = context(fetcher.clone(), parser, Freshness::Forever);
        let store = ctx.store.clone();
        let mut resolver = SiteResolver::new(ctx).unwrap();

        let first = resolver.resolve(ISRO_URL).await.unwrap();
        let second = resolver.resolve("  https://WWW.NPS.GOV/isro/index.htm#contact ").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(fetcher.call_count(), 1);

        let persisted: DomainCache<Site> = store.read(CacheDomain::SiteDetail).unwrap();
        assert_eq!(persisted.get(ISRO_URL), first.as_ref());
    }

    #[tokio::test]
    async fn test_cached_site_survives_restart() {
        let fetcher = Arc::new(FakeFetcher::new());
        let parser = FakeParser::new().with_site(ISRO_URL, isro_page());
        let ctx = context(fetcher.clone(), parser, Freshness::Forever);

        let fetched = SiteResolver::new(ctx.clone()).unwrap().resolve(ISRO_URL).await.unwrap();
        let mut restarted = SiteResolver::new(ctx).unwrap();
        assert_eq!(restarted.cached_count(), 1);

        let cached = restarted.resolve(ISRO_URL).await.unwrap();
        assert_eq!(fetched, cached);
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_address_returns_none_and_writes_nothing() {
        let fetcher = Arc::new(FakeFetcher::new());
        let parser = FakeParser::new().with_site(NOJO_URL, addressless_page("North Country"));
        let ctx = context(fetcher.clone(), parser, Freshness::Forever);
        let store = ctx.store.clone();
        let mut resolver = SiteResolver::new(ctx).unwrap();

        assert_eq!(resolver.resolve(NOJO_URL).await.unwrap(), None);
        assert_eq!(resolver.cached_count(), 0);
        assert!(store.read::<Site>(CacheDomain::SiteDetail).unwrap().is_empty());

        // Not cached, so a second attempt goes back to the network.
        assert_eq!(resolver.resolve(NOJO_URL).await.unwrap(), None);
        assert_eq!(fetcher.call_count(), 2);
    }

    #[tokio::test]
    async fn test_missing_address_wins_over_missing_phone() {
        let fetcher = Arc::new(FakeFetcher::new());
        let page = SitePage { telephone: None, ..addressless_page("North Country") };
        let parser = FakeParser::new().with_site(NOJO_URL, page);
        let mut resolver = SiteResolver::new(context(fetcher, parser, Freshness::Forever)).unwrap();

        assert_eq!(resolver.resolve(NOJO_URL).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_title_is_parse_error() {
        let fetcher = Arc::new(FakeFetcher::new());
        let page = SitePage { title: None, ..isro_page() };
        let parser = FakeParser::new().with_site(ISRO_URL, page);
        let mut resolver = SiteResolver::new(context(fetcher, parser, Freshness::Forever)).unwrap();

        let result = resolver.resolve(ISRO_URL).await;
        assert!(matches!(result, Err(Error::Parse(msg)) if msg.contains("title")));
        assert_eq!(resolver.cached_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_phone_is_parse_error() {
        let fetcher = Arc::new(FakeFetcher::new());
        let page = SitePage { telephone: None, ..isro_page() };
        let parser = FakeParser::new().with_site(ISRO_URL, page);
        let mut resolver = SiteResolver::new(context(fetcher, parser, Freshness::Forever)).unwrap();

        let result = resolver.resolve(ISRO_URL).await;
        assert!(matches!(result, Err(Error::Parse(msg)) if msg.contains("telephone")));
    }

    #[tokio::test]
    async fn test_empty_category_is_kept() {
        let fetcher = Arc::new(FakeFetcher::new());
        let page = SitePage {
            title: Some(TitleBlock { name: "Keweenaw".into(), category: String::new() }),
            address: Some(AddressBlock { city: "Calumet".into(), region: "MI".into(), postal_code: "49913".into() }),
            telephone: Some("906-337-3168".into()),
        };
        let url = "https://www.nps.gov/kewe/index.htm";
        let parser = FakeParser::new().with_site(url, page);
        let mut resolver = SiteResolver::new(context(fetcher, parser, Freshness::Forever)).unwrap();

        let site = resolver.resolve(url).await.unwrap().unwrap();
        assert_eq!(site.category(), "");
        assert_eq!(site.info(), "Keweenaw (): Calumet, MI 49913");
    }

    #[tokio::test]
    async fn test_fetch_failure_leaves_key_uncached() {
        let fetcher = Arc::new(FakeFetcher::new().failing(ISRO_URL));
        let parser = FakeParser::new().with_site(ISRO_URL, isro_page());
        let mut resolver = SiteResolver::new(context(fetcher, parser, Freshness::Forever)).unwrap();

        assert!(matches!(resolver.resolve(ISRO_URL).await, Err(Error::Network(_))));
        assert_eq!(resolver.cached_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let fetcher = Arc::new(FakeFetcher::new());
        let mut resolver = SiteResolver::new(context(fetcher.clone(), FakeParser::new(), Freshness::Forever)).unwrap();

        assert!(matches!(resolver.resolve("mailto:park@nps.gov").await, Err(Error::InvalidUrl(_))));
        assert_eq!(fetcher.call_count(), 0);
    }
}
