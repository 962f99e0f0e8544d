//! Cache freshness policy.

/// Decides whether a cached entry may be served instead of refetching.
///
/// There is no expiry: an entry is either trusted for the life of the cache or,
/// under `Refresh`, only once this process has fetched it itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Freshness {
    /// Anything present in the cache is served as-is.
    #[default]
    Forever,
    /// Entries loaded from storage are ignored and refetched; entries written
    /// during this run are served.
    Refresh,
}

impl Freshness {
    /// Whether to trust an existing entry. `written_this_run` is true when the
    /// entry was stored by this process rather than loaded from storage.
    pub fn trusts(self, written_this_run: bool) -> bool {
        match self {
            Freshness::Forever => true,
            Freshness::Refresh => written_this_run,
        }
    }
}
