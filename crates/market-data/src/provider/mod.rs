//! Upstream provider abstractions and implementations.
//!
//! Three kinds of collaborators feed the dashboard:
//! - [`QuoteProvider`]: current price and symbol search (Finnhub)
//! - [`ListingProvider`]: IPO listings by status (IPO Alerts)
//! - [`MoversProvider`]: daily top gainers / losers (Alpha Vantage)
//!
//! Providers are single-shot: they never retry or cache. Timeouts are set on
//! the HTTP client; caching lives in the core crate.

mod http;
mod traits;

pub mod alpha_vantage;
pub mod finnhub;
pub mod ipo_alerts;

pub use traits::{ListingProvider, MoversProvider, QuoteProvider};
