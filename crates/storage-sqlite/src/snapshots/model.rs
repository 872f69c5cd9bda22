//! Database model for daily portfolio snapshots.

use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use galaxy_core::portfolio::snapshot::PortfolioSnapshot;
use rust_decimal::Decimal;

use crate::errors::StorageError;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::portfolio_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PortfolioSnapshotDB {
    pub snapshot_date: String,
    pub total_value: String,
    pub created_at: String,
}

impl From<&PortfolioSnapshot> for PortfolioSnapshotDB {
    fn from(snapshot: &PortfolioSnapshot) -> Self {
        Self {
            snapshot_date: snapshot.snapshot_date.format(DATE_FORMAT).to_string(),
            total_value: snapshot.total_value.to_string(),
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

impl TryFrom<PortfolioSnapshotDB> for PortfolioSnapshot {
    type Error = StorageError;

    fn try_from(db: PortfolioSnapshotDB) -> Result<Self, Self::Error> {
        let snapshot_date = NaiveDate::parse_from_str(&db.snapshot_date, DATE_FORMAT)
            .map_err(|e| StorageError::Decode(format!("snapshot_date '{}': {}", db.snapshot_date, e)))?;
        let total_value = Decimal::from_str(&db.total_value)
            .map_err(|e| StorageError::Decode(format!("total_value '{}': {}", db.total_value, e)))?;
        Ok(PortfolioSnapshot::new(snapshot_date, total_value))
    }
}
