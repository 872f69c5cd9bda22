use std::sync::Arc;

use chrono::Utc;
use diesel::prelude::*;
use galaxy_core::store::KeyValueStore;
use galaxy_core::Result;

use super::model::KvEntryDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::kv_entries;

/// [`KeyValueStore`] backed by the `kv_entries` table.
///
/// Each call is a single statement on a pooled connection, so the store can
/// be used from synchronous code paths.
pub struct SqliteKeyValueStore {
    pool: Arc<DbPool>,
}

impl SqliteKeyValueStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        kv_entries::table
            .find(key)
            .select(kv_entries::value)
            .first::<String>(&mut conn)
            .optional()
            .into_core()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        let entry = KvEntryDB {
            key: key.to_string(),
            value: value.to_string(),
            updated_at: Utc::now().to_rfc3339(),
        };
        diesel::replace_into(kv_entries::table)
            .values(&entry)
            .execute(&mut conn)
            .into_core()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::delete(kv_entries::table.find(key))
            .execute(&mut conn)
            .into_core()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations};
    use tempfile::tempdir;

    fn create_test_store() -> (SqliteKeyValueStore, Arc<DbPool>, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        (SqliteKeyValueStore::new(pool.clone()), pool, temp_dir)
    }

    #[test]
    fn test_read_missing_key() {
        let (store, _, _dir) = create_test_store();
        assert_eq!(store.read("realizedProfits").unwrap(), None);
    }

    #[test]
    fn test_write_overwrites() {
        let (store, _, _dir) = create_test_store();
        store.write("ipo_upcoming", "first").unwrap();
        store.write("ipo_upcoming", "second").unwrap();
        assert_eq!(store.read("ipo_upcoming").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (store, _, _dir) = create_test_store();
        store.write("ipo_listed", "{}").unwrap();
        store.remove("ipo_listed").unwrap();
        store.remove("ipo_listed").unwrap();
        assert_eq!(store.read("ipo_listed").unwrap(), None);
    }

    #[test]
    fn test_values_survive_new_pool() {
        let (store, _, dir) = create_test_store();
        store.write("realizedProfits", r#"{"AAPL":"450"}"#).unwrap();
        drop(store);

        let pool = create_pool(&dir.path().join("test.db").to_string_lossy()).unwrap();
        let reopened = SqliteKeyValueStore::new(pool);
        assert_eq!(
            reopened.read("realizedProfits").unwrap().as_deref(),
            Some(r#"{"AAPL":"450"}"#)
        );
    }
}
