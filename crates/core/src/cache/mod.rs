//! JSON-document cache for resolved pages and API responses.
//!
//! Each cache domain is one JSON object persisted as a single document. A
//! domain is loaded fully into memory, mutated there, and rewritten wholesale on
//! every flush. It supports:
//!
//! - Pluggable storage backends (files on disk, in-memory for tests)
//! - Atomic replacement of documents via write-then-rename
//! - An explicit freshness policy (no expiry by default)

pub mod backend;
pub mod domain;
pub mod freshness;
pub mod store;

pub use crate::Error;

pub use backend::{CacheBackend, FileBackend, MemoryBackend};
pub use domain::{CacheDomain, DomainCache};
pub use freshness::Freshness;
pub use store::CacheStore;
