pub mod ports;
pub mod stats_use_cases;
pub mod use_cases;

pub use stats_use_cases::StatsUseCases;
