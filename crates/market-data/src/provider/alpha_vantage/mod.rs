//! Alpha Vantage market movers provider.
//!
//! Uses the TOP_GAINERS_LOSERS function, which publishes the top 20 gainers,
//! losers and most actively traded US tickers once per trading day.
//!
//! Free tier: 25 requests/day. The `demo` key serves canned data.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{MarketMover, MarketMovers};
use crate::provider::http::{build_client, parse_json, read_body, send_error};
use crate::provider::MoversProvider;

const BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER_ID: &str = "ALPHA_VANTAGE";

/// Alpha Vantage reports errors and throttling in a 200 body.
#[derive(Debug, Deserialize)]
struct MoversResponse {
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
    last_updated: Option<String>,
    #[serde(default)]
    top_gainers: Vec<MarketMover>,
    #[serde(default)]
    top_losers: Vec<MarketMover>,
    #[serde(default)]
    most_actively_traded: Vec<MarketMover>,
}

pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl AlphaVantageProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: build_client(),
            api_key,
            base_url,
        }
    }

    async fn fetch(&self, params: &[(&str, &str)]) -> Result<String, MarketDataError> {
        if self.api_key.is_empty() {
            return Err(MarketDataError::NotConfigured(PROVIDER_ID.to_string()));
        }

        let mut all_params: Vec<(&str, &str)> = params.to_vec();
        all_params.push(("apikey", &self.api_key));

        let url = reqwest::Url::parse_with_params(&self.base_url, &all_params).map_err(|e| {
            MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to build URL: {}", e),
            }
        })?;

        debug!(
            "Alpha Vantage request: {}",
            url.as_str().replace(&self.api_key, "***")
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| send_error(PROVIDER_ID, e))?;

        read_body(PROVIDER_ID, response).await
    }
}

/// Check for API-level errors in the response.
fn check_api_error(response: &MoversResponse) -> Result<(), MarketDataError> {
    if let Some(ref msg) = response.error_message {
        return Err(MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: msg.clone(),
        });
    }

    for msg in [&response.note, &response.information].into_iter().flatten() {
        if msg.contains("API call frequency") || msg.contains("rate limit") {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }
        warn!("Alpha Vantage note: {}", msg);
    }

    Ok(())
}

#[async_trait]
impl MoversProvider for AlphaVantageProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn market_movers(&self) -> Result<MarketMovers, MarketDataError> {
        let body = self.fetch(&[("function", "TOP_GAINERS_LOSERS")]).await?;
        let response: MoversResponse = parse_json(PROVIDER_ID, &body)?;
        check_api_error(&response)?;

        Ok(MarketMovers {
            last_updated: response.last_updated,
            top_gainers: response.top_gainers,
            top_losers: response.top_losers,
            most_actively_traded: response.most_actively_traded,
        })
    }
}
