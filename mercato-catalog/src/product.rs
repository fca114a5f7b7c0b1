use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::pricing::ValidationError;

/// Volume breakpoint: `price` applies once the ordered quantity reaches `quantity`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TierPrice {
    pub quantity: i64,
    pub price: f64,
}

impl TierPrice {
    pub fn new(quantity: i64, price: f64) -> Self {
        Self { quantity, price }
    }
}

/// The pricing-relevant subset of a catalog product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    pub price: f64,
    pub category: String,
    /// Stored in any order
    #[serde(default)]
    pub tier_prices: Vec<TierPrice>,
}

impl Product {
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            category: category.into(),
            tier_prices: Vec::new(),
        }
    }

    pub fn with_tiers(mut self, tiers: Vec<TierPrice>) -> Self {
        self.tier_prices = tiers;
        self
    }

    pub fn is_tiered(&self) -> bool {
        !self.tier_prices.is_empty()
    }

    /// Tiers ordered by descending breakpoint, the order matching walks them in
    pub fn tiers_descending(&self) -> Vec<&TierPrice> {
        let mut tiers: Vec<&TierPrice> = self.tier_prices.iter().collect();
        tiers.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        tiers
    }

    /// Reject prices and tier tables that would resolve to nonsense
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::InvalidPrice(self.price));
        }

        for (index, tier) in self.tier_prices.iter().enumerate() {
            if tier.quantity < 0 || !tier.price.is_finite() || tier.price < 0.0 {
                return Err(ValidationError::InvalidTier {
                    index,
                    quantity: tier.quantity,
                    price: tier.price,
                });
            }
        }

        Ok(())
    }
}
