//! Finnhub quote provider.
//!
//! - Current price via /quote
//! - Symbol search via /search
//!
//! Finnhub free tier is limited to 60 API calls per minute.
//! API documentation: https://finnhub.io/docs/api

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::SearchResult;
use crate::provider::http::{build_client, parse_json, read_body, send_error};
use crate::provider::QuoteProvider;

const BASE_URL: &str = "https://finnhub.io/api/v1";
const PROVIDER_ID: &str = "FINNHUB";

/// Maximum number of search hits returned to callers.
pub const MAX_SEARCH_RESULTS: usize = 8;

// ============================================================================
// API Response Structures
// ============================================================================

/// Response from /quote endpoint
#[derive(Debug, Deserialize)]
struct QuoteResponse {
    /// Current price
    c: Option<f64>,
    /// Previous close
    pc: Option<f64>,
}

/// Response from /search endpoint
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    result: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    description: String,
    #[serde(default)]
    symbol: String,
    #[serde(rename = "type", default)]
    security_type: String,
}

// ============================================================================
// FinnhubProvider
// ============================================================================

/// Finnhub market data provider.
pub struct FinnhubProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FinnhubProvider {
    /// Create a new Finnhub provider with the given API key.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL.to_string())
    }

    /// Point the provider at a different host (proxies, tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: build_client(),
            api_key,
            base_url,
        }
    }

    /// Make a GET request to the Finnhub API.
    async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String, MarketDataError> {
        if self.api_key.is_empty() {
            return Err(MarketDataError::NotConfigured(PROVIDER_ID.to_string()));
        }

        let url = format!("{}{}", self.base_url, endpoint);

        debug!("Finnhub request: {} with {} params", endpoint, params.len());

        // API key as header rather than query param so it stays out of logs
        let response = self
            .client
            .get(&url)
            .header("X-Finnhub-Token", &self.api_key)
            .query(params)
            .send()
            .await
            .map_err(|e| send_error(PROVIDER_ID, e))?;

        read_body(PROVIDER_ID, response).await
    }
}

/// Pick the live price out of a quote response.
///
/// Finnhub answers unknown symbols with zeros instead of an error, so only a
/// strictly positive current price counts.
fn usable_price(response: &QuoteResponse) -> Option<Decimal> {
    response
        .c
        .filter(|c| *c > 0.0)
        .and_then(|c| Decimal::try_from(c).ok())
}

/// Map Finnhub security type to a display label.
fn map_security_type(finnhub_type: &str) -> String {
    match finnhub_type.to_lowercase().as_str() {
        "common stock" | "stock" => "Stock".to_string(),
        "etf" | "etp" => "ETF".to_string(),
        "adr" | "american depositary receipt" => "ADR".to_string(),
        "reit" => "REIT".to_string(),
        "preferred stock" | "preferred" => "Preferred Stock".to_string(),
        _ => finnhub_type.to_string(),
    }
}

#[async_trait]
impl QuoteProvider for FinnhubProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_price(&self, symbol: &str) -> Result<Option<Decimal>, MarketDataError> {
        let body = self.fetch("/quote", &[("symbol", symbol)]).await?;
        let response: QuoteResponse = parse_json(PROVIDER_ID, &body)?;

        let price = usable_price(&response);
        if price.is_none() {
            debug!(
                "Finnhub: no live price for {} (previous close {:?})",
                symbol, response.pc
            );
        }
        Ok(price)
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, MarketDataError> {
        let query = query.trim().to_uppercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let body = self.fetch("/search", &[("q", query.as_str())]).await?;
        let response: SearchResponse = parse_json(PROVIDER_ID, &body)?;

        let results: Vec<SearchResult> = response
            .result
            .into_iter()
            .filter(|item| !item.symbol.is_empty() && !item.description.is_empty())
            .take(MAX_SEARCH_RESULTS)
            .map(|item| {
                SearchResult::new(
                    item.symbol,
                    item.description,
                    map_security_type(&item.security_type),
                )
            })
            .collect();

        debug!("Finnhub: found {} search results for '{}'", results.len(), query);

        Ok(results)
    }
}
