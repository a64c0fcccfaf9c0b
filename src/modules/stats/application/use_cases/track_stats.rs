use async_trait::async_trait;

use crate::stats::application::ports::outgoing::{StatsRepository, StatsRepositoryError};
use crate::stats::domain::entities::{Metric, Stats};

#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<StatsRepositoryError> for StatsError {
    fn from(error: StatsRepositoryError) -> Self {
        StatsError::RepositoryError(error.to_string())
    }
}

#[async_trait]
pub trait FetchStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Stats, StatsError>;
}

#[async_trait]
pub trait RecordMetricUseCase: Send + Sync {
    async fn execute(&self, metric: Metric) -> Result<Stats, StatsError>;
}

#[derive(Clone)]
pub struct StatsService<R>
where
    R: StatsRepository + Send + Sync,
{
    repository: R,
}

impl<R> StatsService<R>
where
    R: StatsRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> FetchStatsUseCase for StatsService<R>
where
    R: StatsRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Stats, StatsError> {
        Ok(self.repository.get().await?)
    }
}

#[async_trait]
impl<R> RecordMetricUseCase for StatsService<R>
where
    R: StatsRepository + Send + Sync,
{
    async fn execute(&self, metric: Metric) -> Result<Stats, StatsError> {
        Ok(self.repository.increment(metric).await?)
    }
}
