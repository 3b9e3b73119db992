// Cache module for local API response caching.
// Keeps GitHub responses in a single persisted slot to stay under rate limits.

#![allow(dead_code, unused_imports)]

pub mod paths;
pub mod store;

pub use paths::*;
pub use store::{CacheEntry, CacheStore, LISTING_TTL, MAX_ENTRIES, STATUS_TTL};
