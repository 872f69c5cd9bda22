//! Portfolio valuation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where the price used for a valuation or sale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceSource {
    /// A positive quote from the market-data provider.
    Live,
    /// No live quote was available; the holding's cost basis was used.
    CostBasisFallback,
}

impl PriceSource {
    pub fn is_live(&self) -> bool {
        matches!(self, PriceSource::Live)
    }
}

/// One row of the portfolio view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub symbol: String,
    pub company_name: Option<String>,
    pub quantity: i64,
    pub cost_basis: Decimal,
    pub current_price: Decimal,
    pub price_source: PriceSource,
    pub total_cost: Decimal,
    pub market_value: Decimal,
    pub unrealized_profit: Decimal,
    pub unrealized_profit_percent: Decimal,
}

/// The whole portfolio at current prices. Amounts keep full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    pub holdings: Vec<HoldingValuation>,
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub total_return: Decimal,
    pub total_return_percent: Decimal,
    pub unrealized_profit: Decimal,
    pub realized_profit: Decimal,
}

impl PortfolioValuation {
    /// True when at least one row was valued at its cost basis.
    pub fn has_fallback_prices(&self) -> bool {
        self.holdings.iter().any(|h| !h.price_source.is_live())
    }
}
