//! Client code for npsfind.
//!
//! This crate provides the HTTP fetch pipeline, nps.gov page parsing, and the
//! places-search API client used by the resolvers.

pub mod extract;
pub mod fetch;
pub mod places;

pub use extract::{
    AddressBlock, DirectoryPage, ListEntry, MapRegion, NpsPageParser, PageParser, SitePage, StatePage, TitleBlock,
};

pub use fetch::{FetchClient, FetchConfig, FetchResponse, PageFetcher, UrlError, canonicalize, join};

pub use places::{
    Place, PlaceFields, PlacesApi, PlacesClient, PlacesConfig, PlacesError, PlacesResult, RadiusSearchRequest,
};
