//! Error types and retry classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all upstream fetches
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur while talking to an upstream market data service.
///
/// Each variant is classified into a [`RetryClass`] via the
/// [`retry_class`](Self::retry_class) method.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol or listing was not found upstream.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The provider rate limited the request (HTTP 429, or a quota message).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider answered with a body we could not decode.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that sent the body
        provider: String,
        /// What went wrong while decoding
        message: String,
    },

    /// The provider is not configured (missing API key).
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns the retry classification for this error.
    ///
    /// - [`RetryClass::Never`]: the request itself is at fault
    /// - [`RetryClass::WithBackoff`]: the upstream asked us to slow down
    /// - [`RetryClass::Transient`]: a one-off upstream failure
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::NotFound(_) | Self::NotConfigured(_) => RetryClass::Never,

            Self::RateLimited { .. } | Self::Timeout { .. } => RetryClass::WithBackoff,

            Self::ProviderError { .. } | Self::InvalidResponse { .. } | Self::Network(_) => {
                RetryClass::Transient
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_never_retries() {
        let error = MarketDataError::NotFound("INVALID".to_string());
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_not_configured_never_retries() {
        let error = MarketDataError::NotConfigured("FINNHUB".to_string());
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_rate_limited_retries_with_backoff() {
        let error = MarketDataError::RateLimited {
            provider: "FINNHUB".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    }

    #[test]
    fn test_timeout_retries_with_backoff() {
        let error = MarketDataError::Timeout {
            provider: "ALPHA_VANTAGE".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    }

    #[test]
    fn test_provider_error_is_transient() {
        let error = MarketDataError::ProviderError {
            provider: "IPO_ALERTS".to_string(),
            message: "Internal server error".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::Transient);
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::NotFound("INVALID".to_string());
        assert_eq!(format!("{}", error), "Not found: INVALID");

        let error = MarketDataError::RateLimited {
            provider: "FINNHUB".to_string(),
        };
        assert_eq!(format!("{}", error), "Rate limited: FINNHUB");

        let error = MarketDataError::ProviderError {
            provider: "ALPHA_VANTAGE".to_string(),
            message: "API key invalid".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: ALPHA_VANTAGE - API key invalid"
        );
    }
}
