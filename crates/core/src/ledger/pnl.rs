//! Stateless profit/loss arithmetic.

use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};
use crate::holdings::Holding;

/// `(sale − cost) × quantity`. Negative for a loss.
pub fn realized_profit(
    sale_proceeds_per_unit: Decimal,
    cost_basis_per_unit: Decimal,
    quantity_sold: i64,
) -> Decimal {
    (sale_proceeds_per_unit - cost_basis_per_unit) * Decimal::from(quantity_sold)
}

/// Paper profit on a held position at `current_price`.
///
/// The price must be positive. When no live quote exists the caller decides
/// what to substitute; this function never guesses.
pub fn unrealized_profit(holding: &Holding, current_price: Decimal) -> Result<Decimal> {
    if current_price <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePrice(current_price).into());
    }
    Ok((current_price - holding.cost_basis) * Decimal::from(holding.quantity))
}
