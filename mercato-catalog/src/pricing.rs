use serde::{Deserialize, Serialize};
use mercato_shared::Platform;
use crate::commission::CommissionRule;
use crate::product::{Product, TierPrice};

/// The single discount program that applies to a resolution
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AppliedDiscount {
    /// Percent off, in `0..=100`
    pub reward_percentage: f64,
}

impl AppliedDiscount {
    pub fn new(reward_percentage: f64) -> Self {
        Self { reward_percentage }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let reward = self.reward_percentage;
        if !reward.is_finite() || !(0.0..=100.0).contains(&reward) {
            return Err(ValidationError::InvalidReward(reward));
        }
        Ok(())
    }
}

/// Outcome of a price resolution, unrounded
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceResult {
    /// Unit price after the commission buffer; shown struck through when discounted
    pub original_price: f64,
    pub final_price: f64,
    pub has_discount: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<f64>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Price must be a non-negative number, got {0}")]
    InvalidPrice(f64),

    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(i64),

    #[error("Invalid tier at position {index}: quantity {quantity}, price {price}")]
    InvalidTier {
        index: usize,
        quantity: i64,
        price: f64,
    },

    #[error("Commission buffer must be finite and, as a percentage, above -100, got {0}")]
    InvalidBuffer(f64),

    #[error("Reward percentage must be between 0 and 100, got {0}")]
    InvalidReward(f64),
}

/// Unit price before commission: the deepest tier the quantity reaches, else the list price
pub fn base_price(product: &Product, quantity: i64) -> f64 {
    product
        .tiers_descending()
        .into_iter()
        .find(|tier| tier.quantity <= quantity)
        .map(|tier| tier.price)
        .unwrap_or(product.price)
}

/// The closest breakpoint the quantity has not reached yet
pub fn next_tier(product: &Product, quantity: i64) -> Option<&TierPrice> {
    product
        .tier_prices
        .iter()
        .filter(|tier| tier.quantity > quantity)
        .min_by_key(|tier| tier.quantity)
}

/// Resolve the unit price a buyer on `platform` pays for `quantity` units of `product`.
///
/// Order of application: tier/base price selection, commission buffer, then
/// discount. A missing rule or discount leaves the price unchanged. No
/// rounding happens here; see `mercato_shared::money` for display.
pub fn resolve_price(
    product: &Product,
    quantity: i64,
    platform: Platform,
    commission_rule: Option<&CommissionRule>,
    discount: Option<&AppliedDiscount>,
) -> Result<PriceResult, ValidationError> {
    if quantity <= 0 {
        tracing::warn!(quantity, product_id = %product.id, "Rejected non-positive quantity");
        return Err(ValidationError::InvalidQuantity(quantity));
    }
    product.validate().map_err(|e| {
        tracing::warn!(product_id = %product.id, error = %e, "Rejected product");
        e
    })?;
    if let Some(rule) = commission_rule {
        rule.validate()?;
    }
    if let Some(discount) = discount {
        discount.validate()?;
    }

    let base = base_price(product, quantity);
    let original_price = commission_rule.map_or(base, |rule| rule.apply(base));

    let reward = discount
        .map(|d| d.reward_percentage)
        .filter(|reward| *reward > 0.0);

    let final_price = match reward {
        Some(reward) => original_price * (1.0 - reward / 100.0),
        None => original_price,
    };

    tracing::debug!(
        product_id = %product.id,
        %platform,
        quantity,
        base,
        original_price,
        final_price,
        "Resolved price"
    );

    Ok(PriceResult {
        original_price,
        final_price,
        has_discount: reward.is_some(),
        discount_value: reward,
    })
}
