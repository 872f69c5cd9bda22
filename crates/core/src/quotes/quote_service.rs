use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use galaxy_market_data::{QuoteProvider, SearchResult};
use log::{debug, warn};
use rust_decimal::Decimal;

use super::QuoteServiceTrait;
use crate::errors::Result;

pub struct QuoteService {
    provider: Arc<dyn QuoteProvider>,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn latest_price(&self, symbol: &str) -> Option<Decimal> {
        match self.provider.latest_price(symbol).await {
            Ok(Some(price)) if price > Decimal::ZERO => Some(price),
            Ok(_) => {
                debug!("{} returned no usable price for {}", self.provider.id(), symbol);
                None
            }
            Err(e) => {
                warn!("Price lookup for {} via {} failed: {}", symbol, self.provider.id(), e);
                None
            }
        }
    }

    async fn latest_prices(&self, symbols: &[String]) -> HashMap<String, Decimal> {
        let lookups = symbols.iter().map(|symbol| async move {
            let price = self.latest_price(symbol).await;
            (symbol.clone(), price)
        });

        join_all(lookups)
            .await
            .into_iter()
            .filter_map(|(symbol, price)| price.map(|p| (symbol, p)))
            .collect()
    }

    async fn search_symbols(&self, query: &str) -> Result<Vec<SearchResult>> {
        Ok(self.provider.search(query).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_market_data::MarketDataError;
    use rust_decimal_macros::dec;

    struct ScriptedProvider;

    #[async_trait]
    impl QuoteProvider for ScriptedProvider {
        fn id(&self) -> &'static str {
            "SCRIPTED"
        }

        async fn latest_price(
            &self,
            symbol: &str,
        ) -> std::result::Result<Option<Decimal>, MarketDataError> {
            match symbol {
                "AAPL" => Ok(Some(dec!(187.25))),
                "ZERO" => Ok(Some(Decimal::ZERO)),
                "NONE" => Ok(None),
                _ => Err(MarketDataError::RateLimited {
                    provider: "SCRIPTED".to_string(),
                }),
            }
        }

        async fn search(
            &self,
            query: &str,
        ) -> std::result::Result<Vec<SearchResult>, MarketDataError> {
            Ok(vec![SearchResult::new(query, "Match", "Common Stock")])
        }
    }

    fn service() -> QuoteService {
        QuoteService::new(Arc::new(ScriptedProvider))
    }

    #[tokio::test]
    async fn test_latest_price_filters_unusable_quotes() {
        let svc = service();
        assert_eq!(svc.latest_price("AAPL").await, Some(dec!(187.25)));
        assert_eq!(svc.latest_price("ZERO").await, None);
        assert_eq!(svc.latest_price("NONE").await, None);
        assert_eq!(svc.latest_price("FAIL").await, None);
    }

    #[tokio::test]
    async fn test_latest_prices_skips_failures() {
        let symbols = vec!["AAPL".to_string(), "FAIL".to_string(), "NONE".to_string()];
        let prices = service().latest_prices(&symbols).await;
        assert_eq!(prices.len(), 1);
        assert_eq!(prices.get("AAPL"), Some(&dec!(187.25)));
    }

    #[tokio::test]
    async fn test_search_passes_through() {
        let results = service().search_symbols("MSFT").await.unwrap();
        assert_eq!(results[0].symbol, "MSFT");
    }
}
