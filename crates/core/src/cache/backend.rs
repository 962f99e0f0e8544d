//! Storage backends for cache documents.
//!
//! A backend only moves opaque bytes per domain. Decoding and shape checks
//! happen in [`CacheStore`](super::CacheStore).

use super::domain::CacheDomain;
use crate::Error;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// Durable storage for whole cache documents.
pub trait CacheBackend: Send + Sync {
    /// Load the stored document for `domain`, or `None` if nothing was stored yet.
    fn load(&self, domain: CacheDomain) -> Result<Option<Vec<u8>>, Error>;

    /// Replace the stored document for `domain`.
    fn store(&self, domain: CacheDomain, bytes: &[u8]) -> Result<(), Error>;
}

/// One JSON file per domain inside a cache directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Use `dir` as the cache directory. It is created on first store.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the document for `domain`.
    pub fn path(&self, domain: CacheDomain) -> PathBuf {
        self.dir.join(domain.file_name())
    }
}

impl CacheBackend for FileBackend {
    fn load(&self, domain: CacheDomain) -> Result<Option<Vec<u8>>, Error> {
        match fs::read(self.path(domain)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::CacheIo(e)),
        }
    }

    fn store(&self, domain: CacheDomain, bytes: &[u8]) -> Result<(), Error> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path(domain);
        let temp_path = path.with_extension("json.tmp");

        // Write atomically via temp file
        let written = File::create(&temp_path).and_then(|mut file| {
            file.write_all(bytes)?;
            file.sync_all()
        });
        let result = written.and_then(|()| fs::rename(&temp_path, &path));

        if let Err(e) = result {
            tracing::warn!(path = %temp_path.display(), "cache write failed, removing temp file: {}", e);
            let _ = fs::remove_file(&temp_path);
            return Err(Error::CacheIo(e));
        }

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "replaced cache document");
        Ok(())
    }
}

/// In-process backend for tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    docs: Mutex<HashMap<CacheDomain, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw document, bypassing serialization.
    pub fn put_raw(&self, domain: CacheDomain, bytes: impl Into<Vec<u8>>) {
        self.docs.lock().unwrap_or_else(|e| e.into_inner()).insert(domain, bytes.into());
    }

    /// The raw document currently stored for `domain`.
    pub fn raw(&self, domain: CacheDomain) -> Option<Vec<u8>> {
        self.docs.lock().unwrap_or_else(|e| e.into_inner()).get(&domain).cloned()
    }
}

impl CacheBackend for MemoryBackend {
    fn load(&self, domain: CacheDomain) -> Result<Option<Vec<u8>>, Error> {
        Ok(self.raw(domain))
    }

    fn store(&self, domain: CacheDomain, bytes: &[u8]) -> Result<(), Error> {
        self.put_raw(domain, bytes);
        Ok(())
    }
}
