pub mod events;

pub use events::SnapshotPublishedEvent;
