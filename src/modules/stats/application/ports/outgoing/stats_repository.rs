use async_trait::async_trait;

use crate::stats::domain::entities::{Metric, Stats};

#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsRepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn get(&self) -> Result<Stats, StatsRepositoryError>;

    /// Serialized read-modify-write; concurrent bumps must all land.
    async fn increment(&self, metric: Metric) -> Result<Stats, StatsRepositoryError>;

    /// Bumped by the contact path on every stored submission.
    async fn increment_message_count(&self) -> Result<Stats, StatsRepositoryError>;
}
