use async_trait::async_trait;
use chrono::{Datelike, Utc};
use std::sync::Arc;

use crate::shared::storage::{JsonStore, JsonStoreError};
use crate::stats::application::ports::outgoing::{StatsRepository, StatsRepositoryError};
use crate::stats::domain::entities::{Metric, Stats};

const DOCUMENT: &str = "stats";

#[derive(Clone)]
pub struct StatsRepositoryJson {
    store: Arc<JsonStore>,
}

impl StatsRepositoryJson {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

fn map_store_err(error: JsonStoreError) -> StatsRepositoryError {
    StatsRepositoryError::StorageError(error.to_string())
}

#[async_trait]
impl StatsRepository for StatsRepositoryJson {
    async fn get(&self) -> Result<Stats, StatsRepositoryError> {
        self.store.read_doc(DOCUMENT).await.map_err(map_store_err)
    }

    async fn increment(&self, metric: Metric) -> Result<Stats, StatsRepositoryError> {
        let month_index = Utc::now().month0() as usize;

        self.store
            .update_doc::<Stats, _, _>(DOCUMENT, |stats| {
                stats.apply(metric, month_index);
                stats.clone()
            })
            .await
            .map_err(map_store_err)
    }

    async fn increment_message_count(&self) -> Result<Stats, StatsRepositoryError> {
        self.store
            .update_doc::<Stats, _, _>(DOCUMENT, |stats| {
                stats.message_count += 1;
                stats.clone()
            })
            .await
            .map_err(map_store_err)
    }
}
