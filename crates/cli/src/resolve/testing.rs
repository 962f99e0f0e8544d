//! Fakes for resolver tests.
//!
//! `FakeFetcher` serves the requested URL itself as the page body, and
//! `FakeParser` maps that body to a synthetic parsed page.

use super::ResolveContext;
use async_trait::async_trait;
use npsfind_client::{
    AddressBlock, DirectoryPage, PageFetcher, PageParser, PlacesApi, PlacesError, RadiusSearchRequest, SitePage,
    StatePage, TitleBlock,
};
use npsfind_core::{CacheStore, Error, Freshness};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use url::Url;

pub const BASE_URL: &str = "https://www.nps.gov";

pub fn context(fetcher: Arc<FakeFetcher>, parser: FakeParser, freshness: Freshness) -> ResolveContext {
    ResolveContext {
        store: CacheStore::open_in_memory(),
        fetcher,
        parser: Arc::new(parser),
        base_url: Url::parse(BASE_URL).unwrap(),
        freshness,
    }
}

#[derive(Default)]
pub struct FakeFetcher {
    calls: Mutex<Vec<String>>,
    failing: HashSet<String>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make fetches of `url` fail with a network error.
    pub fn failing(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch_html(&self, url: &Url) -> Result<String, Error> {
        self.calls.lock().unwrap().push(url.to_string());
        if self.failing.contains(url.as_str()) {
            return Err(Error::Network(format!("{url}: connection reset")));
        }
        Ok(url.to_string())
    }
}

#[derive(Default)]
pub struct FakeParser {
    directories: HashMap<String, DirectoryPage>,
    states: HashMap<String, StatePage>,
    sites: HashMap<String, SitePage>,
}

impl FakeParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(mut self, url: &str, page: DirectoryPage) -> Self {
        self.directories.insert(url.to_string(), page);
        self
    }

    pub fn with_state(mut self, url: &str, page: StatePage) -> Self {
        self.states.insert(url.to_string(), page);
        self
    }

    pub fn with_site(mut self, url: &str, page: SitePage) -> Self {
        self.sites.insert(url.to_string(), page);
        self
    }
}

fn fixture<T: Clone>(pages: &HashMap<String, T>, html: &str) -> Result<T, Error> {
    pages.get(html).cloned().ok_or_else(|| Error::Parse(format!("no fixture for {html}")))
}

impl PageParser for FakeParser {
    fn parse_directory(&self, html: &str) -> Result<DirectoryPage, Error> {
        fixture(&self.directories, html)
    }

    fn parse_state_page(&self, html: &str) -> Result<StatePage, Error> {
        fixture(&self.states, html)
    }

    fn parse_site_page(&self, html: &str) -> Result<SitePage, Error> {
        fixture(&self.sites, html)
    }
}

/// A detail page with every block present.
pub fn site_page(name: &str, category: &str, city: &str, region: &str, postal_code: &str, phone: &str) -> SitePage {
    SitePage {
        title: Some(TitleBlock { name: name.into(), category: category.into() }),
        address: Some(AddressBlock { city: city.into(), region: region.into(), postal_code: postal_code.into() }),
        telephone: Some(phone.into()),
    }
}

/// A detail page with a title and telephone but no address block.
pub fn addressless_page(name: &str) -> SitePage {
    SitePage {
        title: Some(TitleBlock { name: name.into(), category: "National Trail".into() }),
        address: None,
        telephone: Some("000-000-0000".into()),
    }
}

#[derive(Default)]
pub struct FakePlaces {
    responses: HashMap<String, Value>,
    requests: Mutex<Vec<RadiusSearchRequest>>,
}

impl FakePlaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, origin: &str, response: Value) -> Self {
        self.responses.insert(origin.to_string(), response);
        self
    }

    pub fn requests(&self) -> Vec<RadiusSearchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlacesApi for FakePlaces {
    async fn radius_search(&self, request: &RadiusSearchRequest) -> Result<Value, PlacesError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses.get(&request.origin).cloned().ok_or(PlacesError::HttpError { status: 500 })
    }
}
