use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use rust_decimal::{Decimal, RoundingStrategy};

use super::{Holding, HoldingsRepositoryTrait, HoldingsServiceTrait};
use crate::constants::COST_BASIS_PRECISION;
use crate::errors::{Error, Result, ValidationError};

pub struct HoldingsService {
    repository: Arc<dyn HoldingsRepositoryTrait>,
}

impl HoldingsService {
    pub fn new(repository: Arc<dyn HoldingsRepositoryTrait>) -> Self {
        HoldingsService { repository }
    }

    /// Merge a purchase into an existing position.
    ///
    /// The new cost basis is the quantity-weighted average, rounded to two
    /// decimals half away from zero.
    fn merge(existing: &Holding, purchase: &Holding) -> Holding {
        let total_quantity = existing.quantity + purchase.quantity;
        let total_cost = existing.total_cost() + purchase.total_cost();
        let average = (total_cost / Decimal::from(total_quantity))
            .round_dp_with_strategy(COST_BASIS_PRECISION, RoundingStrategy::MidpointAwayFromZero);

        Holding {
            symbol: existing.symbol.clone(),
            company_name: existing
                .company_name
                .clone()
                .or_else(|| purchase.company_name.clone()),
            quantity: total_quantity,
            cost_basis: average,
        }
    }

    fn not_found(symbol: &str) -> Error {
        Error::NotFound(format!("Holding not found for symbol: {}", symbol))
    }
}

#[async_trait]
impl HoldingsServiceTrait for HoldingsService {
    fn get_holdings(&self) -> Result<Vec<Holding>> {
        self.repository.list_holdings()
    }

    fn get_holding(&self, symbol: &str) -> Result<Holding> {
        self.repository
            .get_holding(symbol)?
            .ok_or_else(|| Self::not_found(symbol))
    }

    async fn add_or_update_holding(&self, new_holding: Holding) -> Result<Holding> {
        new_holding.validate()?;

        let holding = match self.repository.get_holding(&new_holding.symbol)? {
            Some(existing) => {
                let merged = Self::merge(&existing, &new_holding);
                debug!(
                    "Merging {} x{} @ {} into {} x{} @ {} -> x{} @ {}",
                    new_holding.symbol,
                    new_holding.quantity,
                    new_holding.cost_basis,
                    existing.symbol,
                    existing.quantity,
                    existing.cost_basis,
                    merged.quantity,
                    merged.cost_basis
                );
                merged
            }
            None => new_holding,
        };

        self.repository.upsert_holding(holding).await
    }

    async fn update_quantity(&self, symbol: &str, quantity: i64) -> Result<Holding> {
        if quantity <= 0 {
            return Err(ValidationError::NonPositiveQuantity(quantity).into());
        }
        let mut holding = self.get_holding(symbol)?;
        holding.quantity = quantity;
        self.repository.upsert_holding(holding).await
    }

    fn validate_sale(&self, symbol: &str, quantity: i64) -> Result<Holding> {
        if quantity <= 0 {
            return Err(ValidationError::NonPositiveQuantity(quantity).into());
        }
        let holding = self.get_holding(symbol)?;
        if holding.quantity < quantity {
            return Err(ValidationError::InsufficientQuantity {
                symbol: symbol.to_string(),
                held: holding.quantity,
                requested: quantity,
            }
            .into());
        }
        Ok(holding)
    }

    async fn reduce_holding(&self, symbol: &str, quantity: i64) -> Result<Option<Holding>> {
        let mut holding = self.validate_sale(symbol, quantity)?;
        holding.quantity -= quantity;

        if holding.quantity == 0 {
            self.repository.delete_holding(symbol).await?;
            info!("Closed position in {}", symbol);
            Ok(None)
        } else {
            let saved = self.repository.upsert_holding(holding).await?;
            Ok(Some(saved))
        }
    }

    async fn remove_holding(&self, symbol: &str) -> Result<()> {
        let removed = self.repository.delete_holding(symbol).await?;
        if removed == 0 {
            return Err(Self::not_found(symbol));
        }
        Ok(())
    }
}
