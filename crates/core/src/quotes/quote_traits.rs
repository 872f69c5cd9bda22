use std::collections::HashMap;

use async_trait::async_trait;
use galaxy_market_data::SearchResult;
use rust_decimal::Decimal;

use crate::errors::Result;

#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Current positive price, or `None` when the upstream has none or failed.
    async fn latest_price(&self, symbol: &str) -> Option<Decimal>;

    /// Prices for every symbol that has one; symbols without a quote are absent.
    async fn latest_prices(&self, symbols: &[String]) -> HashMap<String, Decimal>;

    async fn search_symbols(&self, query: &str) -> Result<Vec<SearchResult>>;
}
