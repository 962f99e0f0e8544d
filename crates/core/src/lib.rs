//! Core types and shared functionality for npsfind.
//!
//! This crate provides:
//! - JSON-document cache store with pluggable backends
//! - Unified error types
//! - Configuration structures
//! - The `Site` record shared by the resolvers

pub mod cache;
pub mod config;
pub mod error;
pub mod site;

pub use cache::{CacheDomain, CacheStore, DomainCache, Freshness};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use site::Site;
