//! Page parsing for nps.gov markup.
//!
//! Provides a stable parsing abstraction so the resolution pipeline never sees
//! markup.
//!
//! ### Stable Abstraction
//! - The `PageParser` trait turns raw HTML into [`DirectoryPage`],
//!   [`StatePage`] and [`SitePage`] values.
//! - `NpsPageParser` knows which elements, classes and `itemprop` attributes
//!   carry each field.
//!
//! ### Missing vs malformed
//! - A block that is absent from the page is reported as `None`.
//! - A block that is present but lacks a required child is a parse error.

pub mod nps;
pub mod pages;

pub use nps::NpsPageParser;
pub use pages::{AddressBlock, DirectoryPage, ListEntry, MapRegion, SitePage, StatePage, TitleBlock};

use npsfind_core::Error;

/// Turns page markup into structured fields.
pub trait PageParser: Send + Sync {
    /// Parse the national directory page into its map regions.
    fn parse_directory(&self, html: &str) -> Result<DirectoryPage, Error>;

    /// Parse a state page into its list entries, in document order.
    fn parse_state_page(&self, html: &str) -> Result<StatePage, Error>;

    /// Parse a site detail page.
    fn parse_site_page(&self, html: &str) -> Result<SitePage, Error>;
}
