//! Provider trait definitions.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::{IpoListing, IpoPage, IpoQuery, MarketMovers, SearchResult};

/// Supplies live prices for symbols.
///
/// # Example
///
/// ```ignore
/// use galaxy_market_data::{FinnhubProvider, QuoteProvider};
///
/// let provider = FinnhubProvider::new(api_key);
/// match provider.latest_price("AAPL").await? {
///     Some(price) => println!("AAPL {}", price),
///     None => println!("AAPL has no usable quote"),
/// }
/// ```
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch the current price for a symbol.
    ///
    /// Returns `Ok(None)` when the provider answered but has no usable
    /// (positive) price, so callers can apply their own fallback.
    async fn latest_price(&self, symbol: &str) -> Result<Option<Decimal>, MarketDataError>;

    /// Search for symbols matching the query.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, MarketDataError>;
}

/// Supplies IPO listings.
#[async_trait]
pub trait ListingProvider: Send + Sync {
    fn id(&self) -> &'static str;

    /// Fetch one page of listings.
    async fn ipos(&self, query: &IpoQuery) -> Result<IpoPage, MarketDataError>;

    /// Fetch a single listing by identifier (slug or id).
    async fn ipo_details(&self, identifier: &str) -> Result<IpoListing, MarketDataError>;
}

/// Supplies the daily market mover lists.
#[async_trait]
pub trait MoversProvider: Send + Sync {
    fn id(&self) -> &'static str;

    async fn market_movers(&self) -> Result<MarketMovers, MarketDataError>;
}
