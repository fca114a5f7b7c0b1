use std::path::PathBuf;
use async_trait::async_trait;
use mercato_catalog::ValidationError;
use mercato_order::PricingSnapshot;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid snapshot: {0}")]
    Invalid(#[from] ValidationError),
}

/// Where commission rates and promotions come from
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch(&self) -> Result<PricingSnapshot, SnapshotError>;
}

/// Snapshot exported to a JSON file
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    async fn fetch(&self) -> Result<PricingSnapshot, SnapshotError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SnapshotError::Io {
                path: self.path.display().to_string(),
                source,
            })?;

        Ok(serde_json::from_str(&raw)?)
    }
}
