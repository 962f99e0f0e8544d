//! Cache store handle shared by the resolvers.

use super::backend::{CacheBackend, FileBackend, MemoryBackend};
use super::domain::{CacheDomain, DomainCache};
use crate::Error;
use serde::{Serialize, de::DeserializeOwned};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Cache store handle.
///
/// Decodes and encodes whole domain documents on top of a [`CacheBackend`].
/// Cloning is cheap and clones share the same backend.
#[derive(Clone)]
pub struct CacheStore {
    backend: Arc<dyn CacheBackend>,
}

impl std::fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheStore").finish_non_exhaustive()
    }
}

impl CacheStore {
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self { backend }
    }

    /// Open a store with one JSON file per domain under `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileBackend::new(dir)))
    }

    /// Open an in-memory store for testing.
    pub fn open_in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Load the whole document for `domain`.
    ///
    /// A domain with no stored document yields an empty cache. Bytes that are
    /// not a JSON object whose values decode as `V` fail with
    /// [`Error::CacheCorrupt`].
    pub fn read<V: DeserializeOwned>(&self, domain: CacheDomain) -> Result<DomainCache<V>, Error> {
        let Some(bytes) = self.backend.load(domain)? else {
            tracing::debug!(%domain, "no cache document, starting empty");
            return Ok(DomainCache::new(domain));
        };

        let entries: BTreeMap<String, V> = serde_json::from_slice(&bytes)
            .map_err(|e| Error::CacheCorrupt { domain: domain.to_string(), reason: e.to_string() })?;

        tracing::debug!(%domain, entries = entries.len(), "loaded cache document");
        Ok(DomainCache::from_entries(domain, entries))
    }

    /// Serialize `entries` and replace the stored document for `domain`.
    pub fn write<V: Serialize>(&self, domain: CacheDomain, entries: &BTreeMap<String, V>) -> Result<(), Error> {
        let json = serde_json::to_vec_pretty(entries)
            .map_err(|e| Error::CacheIo(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

        self.backend.store(domain, &json)?;
        tracing::debug!(%domain, entries = entries.len(), bytes = json.len(), "wrote cache document");
        Ok(())
    }

    /// Persist an in-memory domain cache.
    pub fn flush<V: Serialize>(&self, cache: &DomainCache<V>) -> Result<(), Error> {
        self.write(cache.domain(), cache.entries())
    }
}
