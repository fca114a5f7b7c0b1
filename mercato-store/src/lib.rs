pub mod app_config;
pub mod snapshot_store;
pub mod source;

pub use snapshot_store::SnapshotStore;
pub use source::{FileSnapshotSource, SnapshotError, SnapshotSource};
