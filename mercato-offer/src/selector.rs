use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use mercato_catalog::Product;
use mercato_shared::Platform;
use crate::models::Promotion;

/// How one promotion is chosen when several apply
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// First applicable entry in the order the store delivered them
    FirstMatch,
    /// Largest reward; the earlier entry wins a tie
    #[default]
    HighestReward,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PromotionSelector {
    policy: SelectionPolicy,
}

impl PromotionSelector {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Every promotion that could discount `product` on `platform` at `now`, in input order
    pub fn applicable<'a>(
        &self,
        promotions: &'a [Promotion],
        product: &Product,
        platform: Platform,
        now: DateTime<Utc>,
    ) -> Vec<&'a Promotion> {
        promotions
            .iter()
            .filter(|promo| promo.applies_to(product, platform, now))
            .collect()
    }

    pub fn select<'a>(
        &self,
        promotions: &'a [Promotion],
        product: &Product,
        platform: Platform,
        now: DateTime<Utc>,
    ) -> Option<&'a Promotion> {
        let candidates = self.applicable(promotions, product, platform, now);

        let chosen = match self.policy {
            SelectionPolicy::FirstMatch => candidates.first().copied(),
            SelectionPolicy::HighestReward => {
                let mut best: Option<&Promotion> = None;
                for promo in candidates {
                    if best.map_or(true, |b| promo.reward_percentage > b.reward_percentage) {
                        best = Some(promo);
                    }
                }
                best
            }
        };

        if let Some(promo) = chosen {
            tracing::debug!(
                promotion_id = %promo.id,
                product_id = %product.id,
                %platform,
                reward = promo.reward_percentage,
                "Selected promotion"
            );
        }

        chosen
    }
}
