use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use log::{debug, info};
use rust_decimal::Decimal;

use super::{DailySummary, PortfolioSnapshot, SnapshotRepositoryTrait, SnapshotServiceTrait};
use crate::errors::{Error, Result};
use crate::holdings::HoldingsServiceTrait;

pub struct SnapshotService {
    holdings_service: Arc<dyn HoldingsServiceTrait>,
    repository: Arc<dyn SnapshotRepositoryTrait>,
}

impl SnapshotService {
    pub fn new(
        holdings_service: Arc<dyn HoldingsServiceTrait>,
        repository: Arc<dyn SnapshotRepositoryTrait>,
    ) -> Self {
        Self {
            holdings_service,
            repository,
        }
    }

    /// Total value at cost basis.
    fn current_total(&self) -> Result<Decimal> {
        Ok(self
            .holdings_service
            .get_holdings()?
            .iter()
            .map(|h| h.total_cost())
            .sum())
    }
}

#[async_trait]
impl SnapshotServiceTrait for SnapshotService {
    async fn generate_daily_summary(&self, today: NaiveDate) -> Result<DailySummary> {
        let yesterday = today
            .checked_sub_days(Days::new(1))
            .ok_or_else(|| Error::Unexpected(format!("No day before {}", today)))?;

        let total_value = self.current_total()?;
        let previous_value = match self.repository.get_snapshot(yesterday)? {
            Some(snapshot) => snapshot.total_value,
            None => {
                debug!("No snapshot for {}, comparing against zero", yesterday);
                Decimal::ZERO
            }
        };

        self.repository
            .upsert_snapshot(PortfolioSnapshot::new(today, total_value))
            .await?;

        let summary = DailySummary::new(today, total_value, total_value - previous_value);
        info!(
            "Daily summary for {}: total {} ({})",
            today, summary.total_value, summary.profit_or_loss
        );
        Ok(summary)
    }
}
