//! Time-bounded cache for slowly changing listings.
//!
//! Entries are stored in the key-value store as `{"data": .., "timestamp": ..}`
//! under `<namespace>_<category>`. An entry is served while
//! `now - timestamp < ttl`; anything older, or anything that fails to parse,
//! is treated as absent and removed.

mod cache_model;
mod ttl_cache;

pub use cache_model::{CacheEntry, CacheLookup};
pub use ttl_cache::TtlCache;
