//! SQLite storage implementation for the Galaxy dashboard.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the traits defined in `galaxy-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The key-value store behind the realized-profit ledger and the listing cache
//! - Repository implementations for holdings and daily snapshots
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

pub mod holdings;
pub mod kv;
pub mod snapshots;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use holdings::HoldingsRepository;
pub use kv::SqliteKeyValueStore;
pub use snapshots::SnapshotRepository;

// Re-export from galaxy-core for convenience
pub use galaxy_core::errors::{DatabaseError, Error, Result};
