pub mod message_repository_json;

pub use message_repository_json::MessageRepositoryJson;
