use serde::{Deserialize, Serialize};
use mercato_catalog::{CommissionRateTable, ValidationError};
use mercato_offer::Promotion;

/// Latest pricing inputs delivered by the commission and promotion stores
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PricingSnapshot {
    #[serde(default)]
    pub commission_rates: CommissionRateTable,
    #[serde(default)]
    pub promotions: Vec<Promotion>,
}

impl PricingSnapshot {
    pub fn new(commission_rates: CommissionRateTable, promotions: Vec<Promotion>) -> Self {
        Self { commission_rates, promotions }
    }

    /// Reject snapshots carrying rules or rewards the resolver would refuse
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (_, _, rule) in self.commission_rates.entries() {
            rule.validate()?;
        }
        for promo in &self.promotions {
            promo.as_discount().validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mercato_catalog::CommissionRule;
    use mercato_shared::Platform;

    #[test]
    fn test_snapshot_from_json() {
        let json = r#"{
            "commission_rates": [
                {"platform": "personalized", "category": "Electronics", "buffer_type": "fixed", "buffer_value": 5.0}
            ],
            "promotions": [
                {"product_scope": "all", "platform": "both", "reward_percentage": 10.0}
            ]
        }"#;
        let snapshot: PricingSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(
            snapshot.commission_rates.rule_for(Platform::Personalized, "Electronics"),
            Some(&CommissionRule::fixed(5.0))
        );
        assert_eq!(snapshot.promotions.len(), 1);
    }

    #[test]
    fn test_validate_rejects_out_of_range_reward() {
        let snapshot = PricingSnapshot::new(
            CommissionRateTable::new(),
            vec![Promotion::new("Too good", mercato_shared::PromotionPlatform::Both, 150.0)],
        );
        assert_eq!(snapshot.validate(), Err(ValidationError::InvalidReward(150.0)));
        assert!(PricingSnapshot::default().validate().is_ok());
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot: PricingSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.commission_rates.is_empty());
        assert!(snapshot.promotions.is_empty());
    }
}
