pub mod stats_repository_json;

pub use stats_repository_json::StatsRepositoryJson;
