use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;
use galaxy_core::portfolio::snapshot::{PortfolioSnapshot, SnapshotRepositoryTrait};
use galaxy_core::Result;

use super::model::{PortfolioSnapshotDB, DATE_FORMAT};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::portfolio_snapshots;

pub struct SnapshotRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SnapshotRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SnapshotRepository { pool, writer }
    }
}

#[async_trait]
impl SnapshotRepositoryTrait for SnapshotRepository {
    fn get_snapshot(&self, date: NaiveDate) -> Result<Option<PortfolioSnapshot>> {
        let mut conn = get_connection(&self.pool)?;
        let row = portfolio_snapshots::table
            .find(date.format(DATE_FORMAT).to_string())
            .select(PortfolioSnapshotDB::as_select())
            .first::<PortfolioSnapshotDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        match row {
            Some(row) => Ok(Some(PortfolioSnapshot::try_from(row)?)),
            None => Ok(None),
        }
    }

    async fn upsert_snapshot(&self, snapshot: PortfolioSnapshot) -> Result<()> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let row = PortfolioSnapshotDB::from(&snapshot);
                diesel::replace_into(portfolio_snapshots::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    async fn create_test_repository() -> (SnapshotRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());
        (SnapshotRepository::new(pool, writer), temp_dir)
    }

    #[tokio::test]
    async fn test_upsert_replaces_same_day() {
        let (repo, _dir) = create_test_repository().await;
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        repo.upsert_snapshot(PortfolioSnapshot::new(day, dec!(1000)))
            .await
            .unwrap();
        repo.upsert_snapshot(PortfolioSnapshot::new(day, dec!(1250.40)))
            .await
            .unwrap();

        let stored = repo.get_snapshot(day).unwrap().unwrap();
        assert_eq!(stored.total_value, dec!(1250.40));
    }

    #[tokio::test]
    async fn test_missing_day() {
        let (repo, _dir) = create_test_repository().await;
        let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert!(repo.get_snapshot(day).unwrap().is_none());
    }
}
