pub mod email_service;

pub use email_service::PortfolioEmailService;
