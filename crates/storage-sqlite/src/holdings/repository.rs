use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use galaxy_core::holdings::{Holding, HoldingsRepositoryTrait};
use galaxy_core::Result;

use super::model::HoldingDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::holdings;

pub struct HoldingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl HoldingsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        HoldingsRepository { pool, writer }
    }
}

#[async_trait]
impl HoldingsRepositoryTrait for HoldingsRepository {
    fn list_holdings(&self) -> Result<Vec<Holding>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = holdings::table
            .order(holdings::symbol.asc())
            .select(HoldingDB::as_select())
            .load::<HoldingDB>(&mut conn)
            .map_err(StorageError::from)?;

        rows.into_iter()
            .map(|row| Holding::try_from(row).map_err(Into::into))
            .collect()
    }

    fn get_holding(&self, symbol: &str) -> Result<Option<Holding>> {
        let mut conn = get_connection(&self.pool)?;
        let row = holdings::table
            .find(symbol)
            .select(HoldingDB::as_select())
            .first::<HoldingDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        match row {
            Some(row) => Ok(Some(Holding::try_from(row)?)),
            None => Ok(None),
        }
    }

    async fn upsert_holding(&self, holding: Holding) -> Result<Holding> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Holding> {
                let row = HoldingDB::from(&holding);
                diesel::replace_into(holdings::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(holding)
            })
            .await
    }

    async fn delete_holding(&self, symbol: &str) -> Result<usize> {
        let symbol = symbol.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let affected = diesel::delete(holdings::table.find(symbol))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(affected)
            })
            .await
    }
}
