pub mod id;
pub mod json_store;

pub use id::next_id;
pub use json_store::{JsonStore, JsonStoreError};
