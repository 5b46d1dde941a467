mod in_memory_snapshot_repo;
mod snapshot_repo;

pub use in_memory_snapshot_repo::InMemorySnapshotRepository;
pub use snapshot_repo::{SqliteSnapshotRepository, DEFAULT_NAMESPACE};
