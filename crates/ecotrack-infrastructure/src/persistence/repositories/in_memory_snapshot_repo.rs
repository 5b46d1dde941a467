use async_trait::async_trait;
use tokio::sync::RwLock;

use ecotrack_domain::shared::DomainError;
use ecotrack_domain::snapshot::{AppSnapshot, SnapshotRepository};

/// Non-durable repository used for dry runs and tests
#[derive(Default)]
pub struct InMemorySnapshotRepository {
    snapshot: RwLock<Option<AppSnapshot>>,
}

impl InMemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: AppSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Some(snapshot)),
        }
    }
}

#[async_trait]
impl SnapshotRepository for InMemorySnapshotRepository {
    async fn load(&self) -> Result<AppSnapshot, DomainError> {
        Ok(self.snapshot.read().await.clone().unwrap_or_default())
    }

    async fn save(&self, snapshot: &AppSnapshot) -> Result<(), DomainError> {
        *self.snapshot.write().await = Some(snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecotrack_domain::shared::PlanId;

    #[tokio::test]
    async fn test_round_trips_last_saved_snapshot() {
        let repo = InMemorySnapshotRepository::new();
        assert_eq!(repo.load().await.unwrap(), AppSnapshot::default());

        let snapshot = AppSnapshot {
            current_plan: Some(PlanId::from_raw(3)),
            ..AppSnapshot::default()
        };
        repo.save(&snapshot).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), snapshot);
    }
}
