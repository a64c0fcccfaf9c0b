pub mod auth;
pub mod education;
pub mod email;
pub mod message;
pub mod project;
pub mod skill;
pub mod stats;
