use std::sync::Arc;

use crate::stats::application::use_cases::{FetchStatsUseCase, RecordMetricUseCase};

#[derive(Clone)]
pub struct StatsUseCases {
    pub fetch: Arc<dyn FetchStatsUseCase + Send + Sync>,
    pub record: Arc<dyn RecordMetricUseCase + Send + Sync>,
}
