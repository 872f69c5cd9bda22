use std::sync::Arc;

use log::{info, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::valuation::{value_portfolio, PortfolioValuation, PriceSource};
use crate::errors::Result;
use crate::holdings::HoldingsServiceTrait;
use crate::ledger::RealizedProfitLedger;
use crate::quotes::QuoteServiceTrait;

/// Result of a completed sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleOutcome {
    pub symbol: String,
    pub quantity: i64,
    pub sale_price: Decimal,
    pub price_source: PriceSource,
    pub realized_profit: Decimal,
    /// Units still held after the sale; zero when the position was closed.
    pub remaining_quantity: i64,
}

/// Orchestrates holdings, live quotes and the realized-profit ledger.
pub struct PortfolioService {
    holdings_service: Arc<dyn HoldingsServiceTrait>,
    quote_service: Arc<dyn QuoteServiceTrait>,
    ledger: Arc<RealizedProfitLedger>,
}

impl PortfolioService {
    pub fn new(
        holdings_service: Arc<dyn HoldingsServiceTrait>,
        quote_service: Arc<dyn QuoteServiceTrait>,
        ledger: Arc<RealizedProfitLedger>,
    ) -> Self {
        Self {
            holdings_service,
            quote_service,
            ledger,
        }
    }

    /// Sell `quantity` units of `symbol` at the live price.
    ///
    /// Without a live quote the sale is priced at the cost basis, realizing
    /// nothing; the outcome's `price_source` says so. Nothing is recorded
    /// when validation or the holding update fails.
    pub async fn sell(&self, symbol: &str, quantity: i64) -> Result<SaleOutcome> {
        let holding = self.holdings_service.validate_sale(symbol, quantity)?;

        let (sale_price, price_source) = match self.quote_service.latest_price(symbol).await {
            Some(price) => (price, PriceSource::Live),
            None => {
                warn!(
                    "No live price for {}, selling at cost basis {}",
                    symbol, holding.cost_basis
                );
                (holding.cost_basis, PriceSource::CostBasisFallback)
            }
        };

        // The ledger only hears about sales whose holding update went through
        let remaining = self.holdings_service.reduce_holding(symbol, quantity).await?;

        let realized_profit =
            self.ledger
                .record_realized_event(symbol, sale_price, holding.cost_basis, quantity)?;

        info!(
            "Sold {} {} at {} ({:?}), realized {}",
            quantity, symbol, sale_price, price_source, realized_profit
        );

        Ok(SaleOutcome {
            symbol: symbol.to_string(),
            quantity,
            sale_price,
            price_source,
            realized_profit,
            remaining_quantity: remaining.map(|h| h.quantity).unwrap_or(0),
        })
    }

    /// Fetch live prices for every holding and value the portfolio.
    pub async fn refresh(&self) -> Result<PortfolioValuation> {
        let holdings = self.holdings_service.get_holdings()?;
        let symbols: Vec<String> = holdings.iter().map(|h| h.symbol.clone()).collect();
        let prices = self.quote_service.latest_prices(&symbols).await;

        Ok(value_portfolio(
            &holdings,
            &prices,
            self.ledger.total_realized_profit(),
        ))
    }

    pub fn total_realized_profit(&self) -> Decimal {
        self.ledger.total_realized_profit()
    }
}
