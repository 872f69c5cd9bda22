mod valuation_calculator;
mod valuation_model;

pub use valuation_calculator::{value_holding, value_portfolio};
pub use valuation_model::{HoldingValuation, PortfolioValuation, PriceSource};
