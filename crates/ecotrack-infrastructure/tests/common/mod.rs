use std::path::Path;
use std::sync::Arc;

use ecotrack_infrastructure::persistence::repositories::{
    SqliteSnapshotRepository, DEFAULT_NAMESPACE,
};
use ecotrack_infrastructure::persistence::Database;

/// Migrated database stored in `dir`
pub async fn setup_file_db(dir: &Path) -> Database {
    let db = Database::new(&dir.join("ecotrack.db"))
        .await
        .expect("Open database file");
    db.run_migrations().await.expect("Run migrations");
    db
}

pub fn snapshot_repo(db: &Database) -> SqliteSnapshotRepository {
    SqliteSnapshotRepository::new(Arc::new(db.pool().clone()), DEFAULT_NAMESPACE)
}
