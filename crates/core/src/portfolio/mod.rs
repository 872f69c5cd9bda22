//! Portfolio-level flows: selling, valuation and daily snapshots.

pub mod snapshot;
pub mod valuation;

mod portfolio_service;


pub use portfolio_service::{PortfolioService, SaleOutcome};
