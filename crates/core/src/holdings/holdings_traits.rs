use async_trait::async_trait;

use super::Holding;
use crate::errors::Result;

/// Repository trait for persisting holdings.
#[async_trait]
pub trait HoldingsRepositoryTrait: Send + Sync {
    fn list_holdings(&self) -> Result<Vec<Holding>>;

    /// `None` when no holding exists for the symbol.
    fn get_holding(&self, symbol: &str) -> Result<Option<Holding>>;

    /// Insert or replace the holding for `holding.symbol`.
    async fn upsert_holding(&self, holding: Holding) -> Result<Holding>;

    /// Returns the number of rows removed (0 or 1).
    async fn delete_holding(&self, symbol: &str) -> Result<usize>;
}

/// Trait for holdings service operations.
#[async_trait]
pub trait HoldingsServiceTrait: Send + Sync {
    fn get_holdings(&self) -> Result<Vec<Holding>>;

    /// Fails with `Error::NotFound` when the symbol is not held.
    fn get_holding(&self, symbol: &str) -> Result<Holding>;

    /// Buy: merge into an existing position (averaging the cost) or open a new one.
    async fn add_or_update_holding(&self, new_holding: Holding) -> Result<Holding>;

    /// Overwrite the quantity of an existing position.
    async fn update_quantity(&self, symbol: &str, quantity: i64) -> Result<Holding>;

    /// Check that `quantity` units of `symbol` can be sold and return the position.
    fn validate_sale(&self, symbol: &str, quantity: i64) -> Result<Holding>;

    /// Sell: reduce the position, deleting it when it reaches zero.
    /// Returns the remaining position, `None` when closed.
    async fn reduce_holding(&self, symbol: &str, quantity: i64) -> Result<Option<Holding>>;

    async fn remove_holding(&self, symbol: &str) -> Result<()>;
}
