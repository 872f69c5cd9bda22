//! Live price lookups on top of a market-data quote provider.

mod quote_service;
mod quote_traits;

pub use quote_service::QuoteService;
pub use quote_traits::QuoteServiceTrait;
