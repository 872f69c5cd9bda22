//! Shared HTTP plumbing for the providers.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::errors::MarketDataError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the HTTP client every provider uses.
pub(crate) fn build_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Map a transport failure to a provider error.
pub(crate) fn send_error(provider: &str, e: reqwest::Error) -> MarketDataError {
    if e.is_timeout() {
        MarketDataError::Timeout {
            provider: provider.to_string(),
        }
    } else {
        MarketDataError::ProviderError {
            provider: provider.to_string(),
            message: format!("Request failed: {}", e),
        }
    }
}

/// Common error body shape (`{"error": "..."}` or `{"message": "..."}`).
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
    message: Option<String>,
}

/// Classify the status code and read the body as text.
pub(crate) async fn read_body(provider: &str, response: Response) -> Result<String, MarketDataError> {
    let status = response.status();

    // 403 is how quota exhaustion is reported by the free plans
    if status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::FORBIDDEN {
        return Err(MarketDataError::RateLimited {
            provider: provider.to_string(),
        });
    }

    if status == StatusCode::UNAUTHORIZED {
        return Err(MarketDataError::ProviderError {
            provider: provider.to_string(),
            message: "Invalid or missing API key".to_string(),
        });
    }

    if status == StatusCode::NOT_FOUND {
        let body = response.text().await.unwrap_or_default();
        return Err(MarketDataError::NotFound(error_message(&body).unwrap_or(body)));
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| format!("HTTP {} - {}", status, body));
        return Err(MarketDataError::ProviderError {
            provider: provider.to_string(),
            message,
        });
    }

    response
        .text()
        .await
        .map_err(|e| MarketDataError::ProviderError {
            provider: provider.to_string(),
            message: format!("Failed to read response: {}", e),
        })
}

/// Decode a JSON body, attributing failures to the provider.
pub(crate) fn parse_json<T: DeserializeOwned>(provider: &str, body: &str) -> Result<T, MarketDataError> {
    serde_json::from_str(body).map_err(|e| MarketDataError::InvalidResponse {
        provider: provider.to_string(),
        message: e.to_string(),
    })
}

fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorResponse = serde_json::from_str(body).ok()?;
    parsed.error.or(parsed.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_error_field() {
        assert_eq!(
            error_message(r#"{"error": "bad token", "message": "other"}"#),
            Some("bad token".to_string())
        );
        assert_eq!(
            error_message(r#"{"message": "Not Found"}"#),
            Some("Not Found".to_string())
        );
        assert_eq!(error_message("<html>"), None);
    }

    #[test]
    fn test_parse_json_reports_provider() {
        let err = parse_json::<serde_json::Value>("FINNHUB", "{not json").unwrap_err();
        match err {
            MarketDataError::InvalidResponse { provider, .. } => assert_eq!(provider, "FINNHUB"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
