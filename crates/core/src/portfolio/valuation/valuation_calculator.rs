use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use super::{HoldingValuation, PortfolioValuation, PriceSource};
use crate::holdings::Holding;
use crate::utils::decimal_utils::percent_of;

/// Value a single holding.
///
/// A missing or non-positive `live_price` falls back to the cost basis, which
/// makes the row's unrealized profit zero; the row is flagged accordingly.
pub fn value_holding(holding: &Holding, live_price: Option<Decimal>) -> HoldingValuation {
    let (current_price, price_source) = match live_price {
        Some(price) if price > Decimal::ZERO => (price, PriceSource::Live),
        _ => {
            debug!("No live price for {}, using cost basis", holding.symbol);
            (holding.cost_basis, PriceSource::CostBasisFallback)
        }
    };

    let quantity = Decimal::from(holding.quantity);
    let total_cost = holding.total_cost();
    let market_value = current_price * quantity;
    let unrealized_profit = market_value - total_cost;

    HoldingValuation {
        symbol: holding.symbol.clone(),
        company_name: holding.company_name.clone(),
        quantity: holding.quantity,
        cost_basis: holding.cost_basis,
        current_price,
        price_source,
        total_cost,
        market_value,
        unrealized_profit,
        unrealized_profit_percent: percent_of(unrealized_profit, total_cost),
    }
}

/// Value every holding against `prices` (symbol -> live price) and roll up
/// the totals. `realized_total` is carried through from the ledger.
pub fn value_portfolio(
    holdings: &[Holding],
    prices: &HashMap<String, Decimal>,
    realized_total: Decimal,
) -> PortfolioValuation {
    let rows: Vec<HoldingValuation> = holdings
        .iter()
        .map(|h| value_holding(h, prices.get(&h.symbol).copied()))
        .collect();

    let total_value: Decimal = rows.iter().map(|r| r.market_value).sum();
    let total_cost: Decimal = rows.iter().map(|r| r.total_cost).sum();
    let unrealized_profit: Decimal = rows.iter().map(|r| r.unrealized_profit).sum();
    let total_return = total_value - total_cost;

    PortfolioValuation {
        holdings: rows,
        total_value,
        total_cost,
        total_return,
        total_return_percent: percent_of(total_return, total_cost),
        unrealized_profit,
        realized_profit: realized_total,
    }
}
