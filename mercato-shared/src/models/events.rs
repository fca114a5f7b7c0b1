use uuid::Uuid;

/// Emitted whenever the pricing inputs (commission rates, promotions) are replaced.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct SnapshotPublishedEvent {
    pub snapshot_id: Uuid,
    pub version: u64,
    pub commission_rules: usize,
    pub promotions: usize,
    pub timestamp: i64,
}

impl SnapshotPublishedEvent {
    pub fn new(version: u64, commission_rules: usize, promotions: usize) -> Self {
        Self {
            snapshot_id: Uuid::new_v4(),
            version,
            commission_rules,
            promotions,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}
