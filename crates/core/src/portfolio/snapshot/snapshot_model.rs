//! Daily portfolio snapshot models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const GAIN_MESSAGE: &str = "Your portfolio gained today";
pub const LOSS_MESSAGE: &str = "Your portfolio incurred a loss today";

/// Portfolio total recorded once per calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub snapshot_date: NaiveDate,
    pub total_value: Decimal,
}

impl PortfolioSnapshot {
    pub fn new(snapshot_date: NaiveDate, total_value: Decimal) -> Self {
        Self {
            snapshot_date,
            total_value,
        }
    }
}

/// Day-over-day change of the portfolio total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_value: Decimal,
    pub profit_or_loss: Decimal,
    pub message: String,
}

impl DailySummary {
    pub fn new(date: NaiveDate, total_value: Decimal, profit_or_loss: Decimal) -> Self {
        let message = if profit_or_loss >= Decimal::ZERO {
            GAIN_MESSAGE
        } else {
            LOSS_MESSAGE
        };
        Self {
            date,
            total_value,
            profit_or_loss,
            message: message.to_string(),
        }
    }
}
