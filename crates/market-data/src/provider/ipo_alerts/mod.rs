//! IPO Alerts listing provider.
//!
//! - Listings via /ipos?page=&limit=&status=&type=
//! - Single listing via /ipos/{identifier}
//!
//! Authentication uses the `x-api-key` header.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{IpoListing, IpoPage, IpoQuery};
use crate::provider::http::{build_client, parse_json, read_body, send_error};
use crate::provider::ListingProvider;

const BASE_URL: &str = "https://api.ipoalerts.in";
const PROVIDER_ID: &str = "IPO_ALERTS";

/// The details endpoint wraps the listing in an `ipo` field; older
/// responses return the listing itself.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DetailsResponse {
    Wrapped { ipo: IpoListing },
    Bare(IpoListing),
}

pub struct IpoAlertsProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl IpoAlertsProvider {
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

    async fn fetch(&self, path: &str, params: &[(&str, String)]) -> Result<String, MarketDataError> {
        if self.api_key.is_empty() {
            return Err(MarketDataError::NotConfigured(PROVIDER_ID.to_string()));
        }

        let url = format!("{}{}", self.base_url, path);
        debug!("IPO Alerts request: {} {:?}", path, params);

        let response = self
            .client
            .get(&url)
            .header("x-api-key", &self.api_key)
            .query(params)
            .send()
            .await
            .map_err(|e| send_error(PROVIDER_ID, e))?;

        read_body(PROVIDER_ID, response).await
    }
}

/// Query string for a listing request, in the order the upstream documents.
fn query_params(query: &IpoQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", query.page.max(1).to_string()),
        ("limit", query.limit.max(1).to_string()),
    ];
    if let Some(status) = query.status {
        params.push(("status", status.as_str().to_string()));
    }
    if let Some(kind) = query.kind.as_deref().filter(|k| !k.is_empty()) {
        params.push(("type", kind.to_string()));
    }
    params
}

#[async_trait]
impl ListingProvider for IpoAlertsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn ipos(&self, query: &IpoQuery) -> Result<IpoPage, MarketDataError> {
        let body = self.fetch("/ipos", &query_params(query)).await?;
        let page: IpoPage = parse_json(PROVIDER_ID, &body)?;
        debug!(
            "IPO Alerts: {} listings for status {:?}",
            page.ipos.len(),
            query.status
        );
        Ok(page)
    }

    async fn ipo_details(&self, identifier: &str) -> Result<IpoListing, MarketDataError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(MarketDataError::NotFound("empty IPO identifier".to_string()));
        }

        let path = format!("/ipos/{}", identifier);
        let body = self.fetch(&path, &[]).await?;
        match parse_json::<DetailsResponse>(PROVIDER_ID, &body)? {
            DetailsResponse::Wrapped { ipo } => Ok(ipo),
            DetailsResponse::Bare(ipo) => Ok(ipo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IpoStatus;

    #[test]
    fn test_query_params_include_filters() {
        let query = IpoQuery {
            status: Some(IpoStatus::Listed),
            kind: Some("SME".to_string()),
            page: 2,
            limit: 5,
        };
        let params = query_params(&query);
        assert_eq!(
            params,
            vec![
                ("page", "2".to_string()),
                ("limit", "5".to_string()),
                ("status", "listed".to_string()),
                ("type", "SME".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_params_clamp_zero_paging() {
        let query = IpoQuery {
            page: 0,
            limit: 0,
            ..IpoQuery::default()
        };
        let params = query_params(&query);
        assert_eq!(params[0], ("page", "1".to_string()));
        assert_eq!(params[1], ("limit", "1".to_string()));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_details_accepts_wrapped_and_bare() {
        let wrapped = r#"{"ipo": {"name": "Acme"}}"#;
        let bare = r#"{"name": "Acme", "symbol": "ACME"}"#;

        match serde_json::from_str::<DetailsResponse>(wrapped).unwrap() {
            DetailsResponse::Wrapped { ipo } => assert_eq!(ipo.name, "Acme"),
            DetailsResponse::Bare(_) => panic!("expected wrapped"),
        }
        match serde_json::from_str::<DetailsResponse>(bare).unwrap() {
            DetailsResponse::Bare(ipo) => assert_eq!(ipo.symbol.as_deref(), Some("ACME")),
            DetailsResponse::Wrapped { .. } => panic!("expected bare"),
        }
    }

    #[tokio::test]
    async fn test_missing_api_key_is_not_configured() {
        let provider = IpoAlertsProvider::new(String::new());
        let err = provider.ipos(&IpoQuery::default()).await.unwrap_err();
        assert!(matches!(err, MarketDataError::NotConfigured(_)));
    }
}
