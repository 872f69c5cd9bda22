use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::REALIZED_PROFITS_KEY;
use crate::ledger::RealizedProfitLedger;
use crate::store::test_support::FlakyStore;
use crate::store::{InMemoryKeyValueStore, KeyValueStore};

fn ledger_with_store() -> (RealizedProfitLedger, Arc<InMemoryKeyValueStore>) {
    let store = Arc::new(InMemoryKeyValueStore::new());
    (RealizedProfitLedger::new(store.clone()), store)
}

#[test]
fn test_empty_ledger_totals_zero() {
    let (ledger, _) = ledger_with_store();
    assert_eq!(ledger.total_realized_profit(), Decimal::ZERO);
    assert_eq!(ledger.realized_profit_for("AAPL"), Decimal::ZERO);
    assert!(ledger.entries().is_empty());
}

#[test]
fn test_gain_then_loss_on_same_symbol() {
    let (ledger, _) = ledger_with_store();

    let first = ledger
        .record_realized_event("AAPL", dec!(150), dec!(100), 10)
        .unwrap();
    assert_eq!(first, dec!(500));

    let second = ledger
        .record_realized_event("AAPL", dec!(90), dec!(100), 5)
        .unwrap();
    assert_eq!(second, dec!(-50));

    assert_eq!(ledger.realized_profit_for("AAPL"), dec!(450));
    assert_eq!(ledger.total_realized_profit(), dec!(450));
}

#[test]
fn test_symbols_are_case_sensitive() {
    let (ledger, _) = ledger_with_store();
    ledger.record_realized_event("abc", dec!(2), dec!(1), 1).unwrap();
    ledger.record_realized_event("ABC", dec!(3), dec!(1), 1).unwrap();

    assert_eq!(ledger.realized_profit_for("abc"), dec!(1));
    assert_eq!(ledger.realized_profit_for("ABC"), dec!(2));
    assert_eq!(
        ledger.entries(),
        vec![("ABC".to_string(), dec!(2)), ("abc".to_string(), dec!(1))]
    );
}

#[test]
fn test_non_positive_quantity_leaves_ledger_unchanged() {
    let (ledger, store) = ledger_with_store();
    ledger.record_realized_event("AAPL", dec!(120), dec!(100), 1).unwrap();
    let persisted = store.read(REALIZED_PROFITS_KEY).unwrap();

    for quantity in [0, -3] {
        let err = ledger
            .record_realized_event("AAPL", dec!(500), dec!(100), quantity)
            .unwrap_err();
        assert!(err.is_validation());
    }

    assert_eq!(ledger.total_realized_profit(), dec!(20));
    assert_eq!(store.read(REALIZED_PROFITS_KEY).unwrap(), persisted);
}

#[test]
fn test_blank_symbol_is_rejected() {
    let (ledger, _) = ledger_with_store();
    let err = ledger
        .record_realized_event("  ", dec!(2), dec!(1), 1)
        .unwrap_err();
    assert!(err.is_validation());
    assert!(ledger.entries().is_empty());
}

#[test]
fn test_full_precision_is_kept_across_small_sales() {
    let (ledger, _) = ledger_with_store();
    // Each sale realizes 0.005, which would round to 0.01 on its own
    for _ in 0..3 {
        ledger
            .record_realized_event("PENNY", dec!(1.005), dec!(1.000), 1)
            .unwrap();
    }
    assert_eq!(ledger.total_realized_profit(), dec!(0.015));
}

#[test]
fn test_mapping_survives_restart() {
    let (ledger, store) = ledger_with_store();
    ledger.record_realized_event("AAPL", dec!(150), dec!(100), 10).unwrap();
    ledger.record_realized_event("MSFT", dec!(280.10), dec!(300), 2).unwrap();
    drop(ledger);

    let restored = RealizedProfitLedger::new(store);
    assert_eq!(restored.realized_profit_for("AAPL"), dec!(500));
    assert_eq!(restored.realized_profit_for("MSFT"), dec!(-39.80));
    assert_eq!(restored.total_realized_profit(), dec!(460.20));
}

#[test]
fn test_restores_numeric_values() {
    let store = Arc::new(InMemoryKeyValueStore::new());
    store
        .write(REALIZED_PROFITS_KEY, r#"{"AAPL": 450, "TSLA": -12.5}"#)
        .unwrap();

    let ledger = RealizedProfitLedger::new(store);
    assert_eq!(ledger.total_realized_profit(), dec!(437.5));
}

#[test]
fn test_malformed_mapping_starts_empty() {
    let store = Arc::new(InMemoryKeyValueStore::new());
    store.write(REALIZED_PROFITS_KEY, "{not json").unwrap();

    let ledger = RealizedProfitLedger::new(store.clone());
    assert_eq!(ledger.total_realized_profit(), Decimal::ZERO);

    ledger.record_realized_event("AAPL", dec!(2), dec!(1), 1).unwrap();
    let raw = store.read(REALIZED_PROFITS_KEY).unwrap().unwrap();
    assert_eq!(raw, r#"{"AAPL":"1"}"#);
}

#[test]
fn test_store_outage_keeps_in_memory_totals() {
    let store = Arc::new(FlakyStore::offline());
    let ledger = RealizedProfitLedger::new(store.clone());

    let profit = ledger
        .record_realized_event("AAPL", dec!(150), dec!(100), 10)
        .unwrap();
    assert_eq!(profit, dec!(500));
    assert_eq!(ledger.total_realized_profit(), dec!(500));
    assert!(store.inner.read(REALIZED_PROFITS_KEY).unwrap().is_none());

    // The next write after recovery carries the whole mapping
    store.set_offline(false);
    ledger.record_realized_event("AAPL", dec!(90), dec!(100), 5).unwrap();
    let raw = store.inner.read(REALIZED_PROFITS_KEY).unwrap().unwrap();
    assert_eq!(raw, r#"{"AAPL":"450"}"#);
}

#[test]
fn test_reset_clears_memory_and_store() {
    let (ledger, store) = ledger_with_store();
    ledger.record_realized_event("AAPL", dec!(150), dec!(100), 10).unwrap();

    ledger.reset();
    assert_eq!(ledger.total_realized_profit(), Decimal::ZERO);
    assert!(store.read(REALIZED_PROFITS_KEY).unwrap().is_none());
}
