use chrono::{DateTime, Utc};
use mercato_catalog::{resolve_price, PriceResult, Product};
use mercato_offer::{Promotion, PromotionSelector};
use mercato_shared::Platform;
use crate::snapshot::PricingSnapshot;
use crate::QuoteResult;

/// Resolves prices against one snapshot of commission rates and promotions
#[derive(Debug, Clone, Copy)]
pub struct PriceResolver<'a> {
    snapshot: &'a PricingSnapshot,
    selector: PromotionSelector,
    now: DateTime<Utc>,
}

impl<'a> PriceResolver<'a> {
    pub fn new(snapshot: &'a PricingSnapshot, selector: PromotionSelector) -> Self {
        Self { snapshot, selector, now: Utc::now() }
    }

    /// Evaluate promotion windows at a fixed instant instead of the current time
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn snapshot(&self) -> &'a PricingSnapshot {
        self.snapshot
    }

    /// The promotion that would discount this product, if any
    pub fn promotion_for(&self, product: &Product, platform: Platform) -> Option<&'a Promotion> {
        self.selector
            .select(&self.snapshot.promotions, product, platform, self.now)
    }

    pub fn resolve(&self, product: &Product, quantity: i64, platform: Platform) -> QuoteResult<PriceResult> {
        let rule = self
            .snapshot
            .commission_rates
            .rule_for(platform, &product.category);
        let discount = self
            .promotion_for(product, platform)
            .map(Promotion::as_discount);

        Ok(resolve_price(product, quantity, platform, rule, discount.as_ref())?)
    }
}
