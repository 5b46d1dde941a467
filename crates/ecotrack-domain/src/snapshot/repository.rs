use async_trait::async_trait;

use super::AppSnapshot;
use crate::shared::DomainError;

/// Whole-document storage for [`AppSnapshot`].
///
/// `load` returns the empty default when nothing was stored yet, and also when the stored
/// document cannot be decoded. Only I/O failures surface as errors.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    async fn load(&self) -> Result<AppSnapshot, DomainError>;
    async fn save(&self, snapshot: &AppSnapshot) -> Result<(), DomainError>;
}
