use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use mercato_order::PricingSnapshot;
use mercato_shared::models::SnapshotPublishedEvent;
use crate::source::{SnapshotError, SnapshotSource};

/// Holds the latest pricing snapshot. Readers clone an `Arc` and never block
/// a publisher; subscribers are woken on every publish.
pub struct SnapshotStore {
    tx: watch::Sender<Arc<PricingSnapshot>>,
    version: AtomicU64,
}

impl SnapshotStore {
    pub fn new(initial: PricingSnapshot) -> Self {
        let (tx, _) = watch::channel(Arc::new(initial));
        Self { tx, version: AtomicU64::new(0) }
    }

    pub fn current(&self) -> Arc<PricingSnapshot> {
        self.tx.borrow().clone()
    }

    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<PricingSnapshot>> {
        self.tx.subscribe()
    }

    /// Replace the snapshot wholesale
    pub fn publish(&self, snapshot: PricingSnapshot) -> SnapshotPublishedEvent {
        let event = SnapshotPublishedEvent::new(
            self.version.fetch_add(1, Ordering::SeqCst) + 1,
            snapshot.commission_rates.len(),
            snapshot.promotions.len(),
        );
        self.tx.send_replace(Arc::new(snapshot));

        tracing::info!(
            version = event.version,
            commission_rules = event.commission_rules,
            promotions = event.promotions,
            "Published pricing snapshot"
        );
        event
    }

    /// Fetch, validate and publish; an invalid snapshot leaves the current one in place
    pub async fn refresh_from(&self, source: &dyn SnapshotSource) -> Result<SnapshotPublishedEvent, SnapshotError> {
        let snapshot = source.fetch().await?;
        snapshot.validate().map_err(|e| {
            tracing::warn!(error = %e, "Rejected pricing snapshot");
            e
        })?;
        Ok(self.publish(snapshot))
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(PricingSnapshot::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mercato_catalog::{CommissionRateTable, CommissionRule, ValidationError};
    use mercato_offer::Promotion;
    use mercato_shared::{Platform, PromotionPlatform};

    fn snapshot_with_promo(reward: f64) -> PricingSnapshot {
        PricingSnapshot::new(
            CommissionRateTable::new().with_rule(Platform::Personalized, "Home", CommissionRule::fixed(1.0)),
            vec![Promotion::new("Sale", PromotionPlatform::Both, reward)],
        )
    }

    #[test]
    fn test_publish_replaces_current() {
        let store = SnapshotStore::default();
        assert!(store.current().promotions.is_empty());
        assert_eq!(store.version(), 0);

        let event = store.publish(snapshot_with_promo(10.0));
        assert_eq!(event.version, 1);
        assert_eq!(event.commission_rules, 1);
        assert_eq!(event.promotions, 1);
        assert_eq!(store.current().promotions[0].reward_percentage, 10.0);

        // publishing works with no subscribers attached
        store.publish(snapshot_with_promo(20.0));
        assert_eq!(store.version(), 2);
        assert_eq!(store.current().promotions[0].reward_percentage, 20.0);
    }

    #[test]
    fn test_readers_keep_their_snapshot() {
        let store = SnapshotStore::new(snapshot_with_promo(10.0));
        let held = store.current();

        store.publish(PricingSnapshot::default());

        assert_eq!(held.promotions.len(), 1);
        assert!(store.current().promotions.is_empty());
    }

    #[tokio::test]
    async fn test_subscriber_sees_update() {
        let store = Arc::new(SnapshotStore::default());
        let mut rx = store.subscribe();

        let publisher = store.clone();
        tokio::spawn(async move {
            publisher.publish(snapshot_with_promo(15.0));
        });

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().promotions[0].reward_percentage, 15.0);
    }

    struct FixedSource(PricingSnapshot);

    #[async_trait]
    impl SnapshotSource for FixedSource {
        async fn fetch(&self) -> Result<PricingSnapshot, SnapshotError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_refresh_from_source() {
        let store = SnapshotStore::default();
        let event = store
            .refresh_from(&FixedSource(snapshot_with_promo(5.0)))
            .await
            .unwrap();

        assert_eq!(event.version, 1);
        assert_eq!(store.current().promotions[0].reward_percentage, 5.0);
    }

    #[tokio::test]
    async fn test_refresh_rejects_invalid_snapshot() {
        let store = SnapshotStore::new(snapshot_with_promo(5.0));

        let err = store
            .refresh_from(&FixedSource(snapshot_with_promo(250.0)))
            .await
            .unwrap_err();

        assert!(matches!(err, SnapshotError::Invalid(ValidationError::InvalidReward(r)) if r == 250.0));
        assert_eq!(store.version(), 0);
        assert_eq!(store.current().promotions[0].reward_percentage, 5.0);
    }
}
