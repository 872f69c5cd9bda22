//! Holding domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A position in a single instrument.
///
/// One holding per symbol; the symbol is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub company_name: Option<String>,
    pub quantity: i64,
    /// Average cost per unit.
    pub cost_basis: Decimal,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, quantity: i64, cost_basis: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            company_name: None,
            quantity,
            cost_basis,
        }
    }

    pub fn with_company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    /// Total amount paid for the position (`cost_basis × quantity`).
    pub fn total_cost(&self) -> Decimal {
        self.cost_basis * Decimal::from(self.quantity)
    }

    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if self.quantity <= 0 {
            return Err(ValidationError::NonPositiveQuantity(self.quantity).into());
        }
        if self.cost_basis <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePrice(self.cost_basis).into());
        }
        Ok(())
    }
}
