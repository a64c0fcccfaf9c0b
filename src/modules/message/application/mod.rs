pub mod message_use_cases;
pub mod ports;
pub mod services;
pub mod use_cases;

pub use message_use_cases::MessageUseCases;
