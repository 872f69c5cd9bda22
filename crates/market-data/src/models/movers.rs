//! Top gainers / losers / most active tickers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single ticker in one of the market mover lists.
///
/// Alpha Vantage sends every number as a string; `Decimal` accepts both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketMover {
    pub ticker: String,
    pub price: Decimal,
    pub change_amount: Decimal,
    /// Already formatted upstream, e.g. "12.5431%".
    pub change_percentage: String,
    pub volume: String,
}

impl MarketMover {
    pub fn volume(&self) -> u64 {
        self.volume.trim().parse().unwrap_or(0)
    }
}

/// The three mover lists published once per trading day.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketMovers {
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub top_gainers: Vec<MarketMover>,
    #[serde(default)]
    pub top_losers: Vec<MarketMover>,
    #[serde(default)]
    pub most_actively_traded: Vec<MarketMover>,
}

impl MarketMovers {
    pub fn is_empty(&self) -> bool {
        self.top_gainers.is_empty()
            && self.top_losers.is_empty()
            && self.most_actively_traded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parses_string_numbers() {
        let body = r#"{
            "metadata": "Top gainers, losers, and most actively traded US tickers",
            "last_updated": "2026-10-16 16:15:59 US/Eastern",
            "top_gainers": [{
                "ticker": "ABCD",
                "price": "3.45",
                "change_amount": "1.15",
                "change_percentage": "50.0%",
                "volume": "1234567"
            }],
            "top_losers": []
        }"#;

        let movers: MarketMovers = serde_json::from_str(body).unwrap();
        assert_eq!(movers.top_gainers.len(), 1);
        assert_eq!(movers.top_gainers[0].price, dec!(3.45));
        assert_eq!(movers.top_gainers[0].volume(), 1_234_567);
        assert!(movers.most_actively_traded.is_empty());
        assert!(!movers.is_empty());
    }

    #[test]
    fn test_unparsable_volume_is_zero() {
        let mover = MarketMover {
            ticker: "X".to_string(),
            price: dec!(1),
            change_amount: dec!(0),
            change_percentage: "0%".to_string(),
            volume: "n/a".to_string(),
        };
        assert_eq!(mover.volume(), 0);
    }
}
