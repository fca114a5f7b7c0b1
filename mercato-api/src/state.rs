use std::sync::Arc;
use mercato_offer::PromotionSelector;
use mercato_order::{PriceResolver, PricingSnapshot};
use mercato_store::app_config::PricingConfig;
use mercato_store::SnapshotStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SnapshotStore>,
    pub pricing: PricingConfig,
}

impl AppState {
    pub fn new(store: Arc<SnapshotStore>, pricing: PricingConfig) -> Self {
        Self { store, pricing }
    }

    pub fn resolver<'a>(&self, snapshot: &'a PricingSnapshot) -> PriceResolver<'a> {
        PriceResolver::new(snapshot, PromotionSelector::new(self.pricing.selection_policy))
    }
}
