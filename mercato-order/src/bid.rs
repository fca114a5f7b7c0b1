use mercato_catalog::{next_tier, Product};
use mercato_shared::Platform;
use crate::models::{BidPreview, NextTierHint};
use crate::resolver::PriceResolver;
use crate::QuoteResult;

/// Preview a corporate bulk bid, with a hint for the next volume breakpoint
pub fn preview_bid(resolver: &PriceResolver<'_>, product: &Product, quantity: i64) -> QuoteResult<BidPreview> {
    let unit = resolver.resolve(product, quantity, Platform::Corporate)?;

    let next_tier = match next_tier(product, quantity) {
        Some(tier) => {
            let next_unit = resolver.resolve(product, tier.quantity, Platform::Corporate)?;
            Some(NextTierHint {
                quantity: tier.quantity,
                units_needed: tier.quantity - quantity,
                unit: next_unit,
                savings_per_unit: unit.final_price - next_unit.final_price,
            })
        }
        None => None,
    };

    Ok(BidPreview {
        product_id: product.id,
        quantity,
        unit,
        total: unit.final_price * quantity as f64,
        next_tier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mercato_catalog::{CommissionRateTable, CommissionRule, TierPrice};
    use mercato_offer::PromotionSelector;
    use crate::snapshot::PricingSnapshot;
    use crate::QuoteError;

    fn product() -> Product {
        Product::new("Copy paper", "Office", 10.0).with_tiers(vec![
            TierPrice::new(100, 9.0),
            TierPrice::new(500, 8.0),
            TierPrice::new(1000, 7.0),
        ])
    }

    #[test]
    fn test_preview_with_next_tier() {
        let snapshot = PricingSnapshot::new(
            CommissionRateTable::new().with_rule(Platform::Corporate, "Office", CommissionRule::fixed(1.0)),
            Vec::new(),
        );
        let resolver = PriceResolver::new(&snapshot, PromotionSelector::default());

        let preview = preview_bid(&resolver, &product(), 150).unwrap();

        assert_eq!(preview.unit.final_price, 10.0);
        assert_eq!(preview.total, 1500.0);

        let hint = preview.next_tier.unwrap();
        assert_eq!(hint.quantity, 500);
        assert_eq!(hint.units_needed, 350);
        assert_eq!(hint.unit.final_price, 9.0);
        assert_eq!(hint.savings_per_unit, 1.0);
    }

    #[test]
    fn test_preview_at_top_tier() {
        let snapshot = PricingSnapshot::default();
        let resolver = PriceResolver::new(&snapshot, PromotionSelector::default());

        let preview = preview_bid(&resolver, &product(), 2000).unwrap();
        assert_eq!(preview.unit.final_price, 7.0);
        assert!(preview.next_tier.is_none());
    }

    #[test]
    fn test_preview_rejects_zero_quantity() {
        let snapshot = PricingSnapshot::default();
        let resolver = PriceResolver::new(&snapshot, PromotionSelector::default());

        assert!(matches!(
            preview_bid(&resolver, &product(), 0),
            Err(QuoteError::Validation(_))
        ));
    }
}
