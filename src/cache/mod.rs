//! Cache module for storing fetched weather records on disk
//!
//! This module provides a file-backed store that keeps every fetched record in
//! a single JSON array and answers whether a fresh-enough record exists for a
//! coordinate pair.

mod store;

pub use store::{find_fresh, CacheError, CacheStore, DEFAULT_CACHE_FILE};
