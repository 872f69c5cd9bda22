use async_trait::async_trait;
use chrono::NaiveDate;

use super::{DailySummary, PortfolioSnapshot};
use crate::errors::Result;

#[async_trait]
pub trait SnapshotRepositoryTrait: Send + Sync {
    fn get_snapshot(&self, date: NaiveDate) -> Result<Option<PortfolioSnapshot>>;

    /// Insert or replace the snapshot for `snapshot.snapshot_date`.
    async fn upsert_snapshot(&self, snapshot: PortfolioSnapshot) -> Result<()>;
}

#[async_trait]
pub trait SnapshotServiceTrait: Send + Sync {
    /// Record today's total and compare it with yesterday's.
    async fn generate_daily_summary(&self, today: NaiveDate) -> Result<DailySummary>;
}
