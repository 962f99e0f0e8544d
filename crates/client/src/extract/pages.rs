//! Parsed page shapes handed to the resolvers.
//!
//! These carry fields, not markup. A missing block is `None`; what a missing
//! block means is decided by the resolver that consumes it.

/// One clickable region of the national directory map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRegion {
    /// Display name, e.g. "Michigan".
    pub name: String,
    /// Link as written in the page, usually site-relative.
    pub href: String,
}

/// The national "find a park" directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryPage {
    pub regions: Vec<MapRegion>,
}

/// One list item on a state page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Whether the item is marked as a navigable site.
    pub is_asset: bool,
    /// Link to the site's detail page, if the item carries one.
    pub detail_href: Option<String>,
}

/// A state page listing its sites in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatePage {
    pub entries: Vec<ListEntry>,
}

/// Name and designation from a detail page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBlock {
    pub name: String,
    /// Designation such as "National Park"; may be empty.
    pub category: String,
}

/// Structured postal address from a detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBlock {
    pub city: String,
    pub region: String,
    pub postal_code: String,
}

/// A site detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitePage {
    pub title: Option<TitleBlock>,
    pub address: Option<AddressBlock>,
    pub telephone: Option<String>,
}
