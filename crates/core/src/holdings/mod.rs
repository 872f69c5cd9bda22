//! Holdings book: one position per symbol with an averaged cost basis.

mod holdings_model;
mod holdings_service;
mod holdings_traits;


pub use holdings_model::Holding;
pub use holdings_service::HoldingsService;
pub use holdings_traits::{HoldingsRepositoryTrait, HoldingsServiceTrait};
