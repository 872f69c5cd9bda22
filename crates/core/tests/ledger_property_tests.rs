//! Property-based tests for the realized profit ledger and P/L arithmetic.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use std::sync::Arc;

use galaxy_core::holdings::Holding;
use galaxy_core::ledger::{realized_profit, unrealized_profit, RealizedProfitLedger};
use galaxy_core::store::InMemoryKeyValueStore;
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Price in cents between 0.01 and 10,000.00.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_symbol() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("AAPL".to_string()),
        Just("MSFT".to_string()),
        Just("TSLA".to_string()),
        Just("aapl".to_string()),
    ]
}

/// (symbol, sale price, cost basis, quantity)
fn arb_sale() -> impl Strategy<Value = (String, Decimal, Decimal, i64)> {
    (arb_symbol(), arb_price(), arb_price(), 1i64..10_000)
}

fn new_ledger() -> RealizedProfitLedger {
    RealizedProfitLedger::new(Arc::new(InMemoryKeyValueStore::new()))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn total_equals_sum_of_events_in_any_order(
        sales in proptest::collection::vec(arb_sale(), 0..20)
    ) {
        let forward = new_ledger();
        let backward = new_ledger();
        let mut expected = Decimal::ZERO;

        for (symbol, sale, cost, qty) in &sales {
            expected += forward.record_realized_event(symbol, *sale, *cost, *qty).unwrap();
        }
        for (symbol, sale, cost, qty) in sales.iter().rev() {
            backward.record_realized_event(symbol, *sale, *cost, *qty).unwrap();
        }

        prop_assert_eq!(forward.total_realized_profit(), expected);
        prop_assert_eq!(backward.total_realized_profit(), expected);
        prop_assert_eq!(forward.entries(), backward.entries());
    }

    #[test]
    fn per_symbol_amounts_sum_to_total(
        sales in proptest::collection::vec(arb_sale(), 1..20)
    ) {
        let ledger = new_ledger();
        for (symbol, sale, cost, qty) in &sales {
            ledger.record_realized_event(symbol, *sale, *cost, *qty).unwrap();
        }
        let summed: Decimal = ledger.entries().iter().map(|(_, amount)| *amount).sum();
        prop_assert_eq!(summed, ledger.total_realized_profit());
    }

    #[test]
    fn restart_restores_identical_totals(
        sales in proptest::collection::vec(arb_sale(), 1..10)
    ) {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let ledger = RealizedProfitLedger::new(store.clone());
        for (symbol, sale, cost, qty) in &sales {
            ledger.record_realized_event(symbol, *sale, *cost, *qty).unwrap();
        }

        let restored = RealizedProfitLedger::new(store);
        prop_assert_eq!(restored.entries(), ledger.entries());
    }

    #[test]
    fn realized_profit_sign_matches_price_move(
        sale in arb_price(), cost in arb_price(), qty in 1i64..10_000
    ) {
        let profit = realized_profit(sale, cost, qty);
        prop_assert_eq!(profit > Decimal::ZERO, sale > cost);
        prop_assert_eq!(profit.is_zero(), sale == cost);
    }

    #[test]
    fn unrealized_is_zero_at_cost_and_linear_in_quantity(
        cost in arb_price(), price in arb_price(), qty in 1i64..10_000
    ) {
        let holding = Holding::new("AAPL", qty, cost);
        prop_assert_eq!(unrealized_profit(&holding, cost).unwrap(), Decimal::ZERO);

        let single = unrealized_profit(&Holding::new("AAPL", 1, cost), price).unwrap();
        let scaled = unrealized_profit(&holding, price).unwrap();
        prop_assert_eq!(scaled, single * Decimal::from(qty));
        prop_assert_eq!(scaled > Decimal::ZERO, price > cost);
    }
}
