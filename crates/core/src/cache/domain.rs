//! Cache domains and their in-memory mapping.

use super::freshness::Freshness;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// One independently persisted key-value store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CacheDomain {
    /// Lowercase state name -> state page URL.
    StateUrl,
    /// Canonical site detail URL -> site record.
    SiteDetail,
    /// Postal code -> raw places-search response.
    NearbyPlaces,
}

impl CacheDomain {
    /// Stable domain name, also the document stem on disk.
    pub fn name(&self) -> &'static str {
        match self {
            CacheDomain::StateUrl => "state_url",
            CacheDomain::SiteDetail => "site_detail",
            CacheDomain::NearbyPlaces => "nearby_places",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for CacheDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The in-memory mapping for one cache domain.
///
/// Keys inserted since the domain was loaded are tracked separately so a
/// `Freshness::Refresh` policy can tell entries fetched by this process apart
/// from entries read off disk.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainCache<V> {
    domain: CacheDomain,
    entries: BTreeMap<String, V>,
    written: BTreeSet<String>,
}

impl<V> DomainCache<V> {
    /// Create an empty cache for `domain`.
    pub fn new(domain: CacheDomain) -> Self {
        Self { domain, entries: BTreeMap::new(), written: BTreeSet::new() }
    }

    /// Wrap entries loaded from storage.
    pub fn from_entries(domain: CacheDomain, entries: BTreeMap<String, V>) -> Self {
        Self { domain, entries, written: BTreeSet::new() }
    }

    pub fn domain(&self) -> CacheDomain {
        self.domain
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or replace an entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        self.written.insert(key.clone());
        self.entries.insert(key, value)
    }

    /// Replace the whole mapping. Every new key counts as written.
    pub fn replace_all(&mut self, entries: BTreeMap<String, V>) {
        self.written = entries.keys().cloned().collect();
        self.entries = entries;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &BTreeMap<String, V> {
        &self.entries
    }

    /// Look up `key`, returning it only if `freshness` trusts the entry.
    pub fn lookup(&self, key: &str, freshness: Freshness) -> Option<&V> {
        let value = self.entries.get(key)?;
        freshness.trusts(self.written.contains(key)).then_some(value)
    }

    /// Whether the domain as a whole can be served without refetching.
    ///
    /// Used by domains that are cached as a single opaque unit.
    pub fn is_trusted(&self, freshness: Freshness) -> bool {
        !self.entries.is_empty() && freshness.trusts(!self.written.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_names() {
        assert_eq!(CacheDomain::StateUrl.file_name(), "state_url.json");
        assert_eq!(CacheDomain::SiteDetail.file_name(), "site_detail.json");
        assert_eq!(CacheDomain::NearbyPlaces.to_string(), "nearby_places");
    }

    #[test]
    fn test_insert_and_get() {
        let mut cache = DomainCache::new(CacheDomain::StateUrl);
        assert!(cache.is_empty());
        assert!(cache.insert("michigan", "https://www.nps.gov/state/mi/index.htm".to_string()).is_none());
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("michigan"));
        assert_eq!(cache.get("michigan").map(String::as_str), Some("https://www.nps.gov/state/mi/index.htm"));
    }

    #[test]
    fn test_lookup_forever_trusts_loaded_entries() {
        let entries = BTreeMap::from([("49931".to_string(), 1)]);
        let cache = DomainCache::from_entries(CacheDomain::NearbyPlaces, entries);
        assert_eq!(cache.lookup("49931", Freshness::Forever), Some(&1));
        assert_eq!(cache.lookup("00000", Freshness::Forever), None);
    }

    #[test]
    fn test_lookup_refresh_ignores_loaded_entries() {
        let entries = BTreeMap::from([("49931".to_string(), 1)]);
        let mut cache = DomainCache::from_entries(CacheDomain::NearbyPlaces, entries);
        assert_eq!(cache.lookup("49931", Freshness::Refresh), None);

        cache.insert("49931", 2);
        assert_eq!(cache.lookup("49931", Freshness::Refresh), Some(&2));
    }

    #[test]
    fn test_is_trusted() {
        let empty: DomainCache<String> = DomainCache::new(CacheDomain::StateUrl);
        assert!(!empty.is_trusted(Freshness::Forever));

        let entries = BTreeMap::from([("ohio".to_string(), "u".to_string())]);
        let mut loaded = DomainCache::from_entries(CacheDomain::StateUrl, entries.clone());
        assert!(loaded.is_trusted(Freshness::Forever));
        assert!(!loaded.is_trusted(Freshness::Refresh));

        loaded.replace_all(entries);
        assert!(loaded.is_trusted(Freshness::Refresh));
    }
}
