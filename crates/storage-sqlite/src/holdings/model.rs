//! Database model for holdings.

use std::str::FromStr;

use chrono::Utc;
use diesel::prelude::*;
use galaxy_core::holdings::Holding;
use rust_decimal::Decimal;

use crate::errors::StorageError;

/// Database model for holdings. Decimals are stored as text.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::holdings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HoldingDB {
    pub symbol: String,
    pub company_name: Option<String>,
    pub quantity: i64,
    pub cost_basis: String,
    pub updated_at: String,
}

impl From<&Holding> for HoldingDB {
    fn from(holding: &Holding) -> Self {
        Self {
            symbol: holding.symbol.clone(),
            company_name: holding.company_name.clone(),
            quantity: holding.quantity,
            cost_basis: holding.cost_basis.to_string(),
            updated_at: Utc::now().to_rfc3339(),
        }
    }
}

impl TryFrom<HoldingDB> for Holding {
    type Error = StorageError;

    fn try_from(db: HoldingDB) -> Result<Self, Self::Error> {
        let cost_basis = Decimal::from_str(&db.cost_basis).map_err(|e| {
            StorageError::Decode(format!("cost_basis '{}' for {}: {}", db.cost_basis, db.symbol, e))
        })?;
        Ok(Holding {
            symbol: db.symbol,
            company_name: db.company_name,
            quantity: db.quantity,
            cost_basis,
        })
    }
}
