use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, warn};
use rust_decimal::Decimal;

use super::pnl::realized_profit;
use crate::constants::REALIZED_PROFITS_KEY;
use crate::errors::{Result, ValidationError};
use crate::store::KeyValueStore;

/// Running realized profit per symbol.
///
/// The mapping lives in memory and is written through to the key-value store
/// after every recorded sale. The store is a mirror, never the source of
/// truth while the process runs: if a write fails the in-memory totals stay
/// correct and the next successful write carries the whole mapping.
pub struct RealizedProfitLedger {
    store: Arc<dyn KeyValueStore>,
    profits: RwLock<HashMap<String, Decimal>>,
}

impl RealizedProfitLedger {
    /// Create a ledger, restoring any mapping previously persisted in `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let profits = Self::restore(store.as_ref());
        Self {
            store,
            profits: RwLock::new(profits),
        }
    }

    fn restore(store: &dyn KeyValueStore) -> HashMap<String, Decimal> {
        let raw = match store.read(REALIZED_PROFITS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return HashMap::new(),
            Err(e) => {
                warn!("Could not read realized profits, starting empty: {}", e);
                return HashMap::new();
            }
        };

        match serde_json::from_str::<HashMap<String, Decimal>>(&raw) {
            Ok(profits) => {
                debug!("Restored realized profits for {} symbols", profits.len());
                profits
            }
            Err(e) => {
                warn!("Stored realized profits are malformed, starting empty: {}", e);
                HashMap::new()
            }
        }
    }

    /// Record a sale and return the profit (negative for a loss) it realized.
    ///
    /// `quantity_sold` must be positive; invalid input leaves the ledger
    /// untouched.
    pub fn record_realized_event(
        &self,
        symbol: &str,
        sale_proceeds_per_unit: Decimal,
        cost_basis_per_unit: Decimal,
        quantity_sold: i64,
    ) -> Result<Decimal> {
        if symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if quantity_sold <= 0 {
            return Err(ValidationError::NonPositiveQuantity(quantity_sold).into());
        }

        let profit = realized_profit(sale_proceeds_per_unit, cost_basis_per_unit, quantity_sold);

        let mut profits = self.profits.write().unwrap_or_else(PoisonError::into_inner);
        *profits.entry(symbol.to_string()).or_insert(Decimal::ZERO) += profit;

        // Written under the lock so the last persisted copy is the latest one
        self.persist(&profits);

        debug!(
            "Recorded realized {} for {} ({} units at {} vs cost {})",
            profit, symbol, quantity_sold, sale_proceeds_per_unit, cost_basis_per_unit
        );

        Ok(profit)
    }

    /// Sum over every symbol. Zero for an empty ledger.
    pub fn total_realized_profit(&self) -> Decimal {
        self.profits
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .copied()
            .sum()
    }

    /// Accumulated profit for one symbol; zero when nothing was recorded.
    pub fn realized_profit_for(&self, symbol: &str) -> Decimal {
        self.profits
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(symbol)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// All entries, sorted by symbol.
    pub fn entries(&self) -> Vec<(String, Decimal)> {
        let profits = self.profits.read().unwrap_or_else(PoisonError::into_inner);
        let sorted: BTreeMap<&String, &Decimal> = profits.iter().collect();
        sorted
            .into_iter()
            .map(|(symbol, amount)| (symbol.clone(), *amount))
            .collect()
    }

    /// Administrative reset: forget every recorded sale.
    pub fn reset(&self) {
        let mut profits = self.profits.write().unwrap_or_else(PoisonError::into_inner);
        profits.clear();
        if let Err(e) = self.store.remove(REALIZED_PROFITS_KEY) {
            warn!("Failed to remove persisted realized profits: {}", e);
        }
    }

    fn persist(&self, profits: &HashMap<String, Decimal>) {
        let sorted: BTreeMap<&String, &Decimal> = profits.iter().collect();
        let payload = match serde_json::to_string(&sorted) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to serialize realized profits: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.write(REALIZED_PROFITS_KEY, &payload) {
            warn!(
                "Failed to persist realized profits, keeping in-memory totals: {}",
                e
            );
        }
    }
}
