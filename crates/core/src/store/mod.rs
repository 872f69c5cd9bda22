//! Key-value persistence contract.
//!
//! The ledger and the listing cache persist opaque string payloads under
//! string keys. The SQLite implementation lives in `galaxy-storage-sqlite`;
//! [`InMemoryKeyValueStore`] backs tests and the no-database fallback.

mod memory_store;
mod store_traits;

pub use memory_store::InMemoryKeyValueStore;
pub use store_traits::KeyValueStore;

#[cfg(test)]
pub(crate) mod test_support;
