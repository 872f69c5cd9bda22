//! Realized and unrealized profit/loss bookkeeping.

mod pnl;
mod realized_ledger;

#[cfg(test)]
mod realized_ledger_tests;

pub use pnl::{realized_profit, unrealized_profit};
pub use realized_ledger::RealizedProfitLedger;
