pub mod track_stats;

pub use track_stats::{
    FetchStatsUseCase, RecordMetricUseCase, StatsError, StatsService,
};
