//! Galaxy Core - Domain entities, services, and traits.
//!
//! This crate holds the portfolio logic of the Galaxy dashboard: the holding
//! book, the realized/unrealized profit ledger, valuation and daily snapshots,
//! and the TTL cache in front of the market listing providers.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod cache;
pub mod constants;
pub mod errors;
pub mod holdings;
pub mod ledger;
pub mod listings;
pub mod portfolio;
pub mod quotes;
pub mod store;
pub mod utils;

pub use holdings::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
