//! Galaxy Market Data Crate
//!
//! Upstream collaborators for the Galaxy portfolio dashboard.
//!
//! # Overview
//!
//! ```text
//! +------------------+      +----------------------+
//! |   galaxy-core    | ---> |  QuoteProvider       |  Finnhub (/quote, /search)
//! |  (orchestration, |      +----------------------+
//! |   caching, P/L)  | ---> |  ListingProvider     |  IPO Alerts (/ipos)
//! |                  |      +----------------------+
//! |                  | ---> |  MoversProvider      |  Alpha Vantage (TOP_GAINERS_LOSERS)
//! +------------------+      +----------------------+
//! ```
//!
//! Providers are single-shot: every call is one HTTP request with a client
//! timeout. Retry, fallback and caching decisions belong to the caller; the
//! [`RetryClass`] on each error helps it decide.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::{MarketDataError, RetryClass};

pub use models::{
    IpoListing, IpoPage, IpoQuery, IpoStatus, MarketMover, MarketMovers, SearchResult,
    DEFAULT_IPO_PAGE_LIMIT,
};

pub use provider::alpha_vantage::AlphaVantageProvider;
pub use provider::finnhub::FinnhubProvider;
pub use provider::ipo_alerts::IpoAlertsProvider;
pub use provider::{ListingProvider, MoversProvider, QuoteProvider};
