use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use ecotrack_domain::shared::DomainError;
use ecotrack_domain::snapshot::{AppSnapshot, SnapshotRepository};

use crate::persistence::result_ext::ResultExt;

pub const DEFAULT_NAMESPACE: &str = "ecotrack";

/// Stores the snapshot as one JSON document keyed by namespace
pub struct SqliteSnapshotRepository {
    pool: Arc<SqlitePool>,
    namespace: String,
}

impl SqliteSnapshotRepository {
    pub fn new(pool: Arc<SqlitePool>, namespace: impl Into<String>) -> Self {
        Self {
            pool,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

#[async_trait]
impl SnapshotRepository for SqliteSnapshotRepository {
    async fn load(&self) -> Result<AppSnapshot, DomainError> {
        let row = sqlx::query("SELECT payload FROM app_state WHERE namespace = ?")
            .bind(&self.namespace)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_repo_error("Failed to load snapshot")?;

        let Some(row) = row else {
            log::debug!("No snapshot stored for namespace '{}'", self.namespace);
            return Ok(AppSnapshot::default());
        };

        let payload: String = row.get("payload");
        match serde_json::from_str::<AppSnapshot>(&payload) {
            Ok(snapshot) => Ok(snapshot),
            Err(e) => {
                log::warn!(
                    "Stored snapshot for namespace '{}' is corrupt, starting from empty state: {}",
                    self.namespace,
                    e
                );
                Ok(AppSnapshot::default())
            }
        }
    }

    async fn save(&self, snapshot: &AppSnapshot) -> Result<(), DomainError> {
        let payload = serde_json::to_string(snapshot)?;

        sqlx::query(
            r#"
            INSERT INTO app_state (namespace, payload, updated_at)
            VALUES (?, ?, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            ON CONFLICT(namespace) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&self.namespace)
        .bind(payload)
        .execute(self.pool.as_ref())
        .await
        .map_repo_error("Failed to save snapshot")?;

        Ok(())
    }
}
