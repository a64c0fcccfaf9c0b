mod create_education;
mod delete_education;
mod get_education;
mod update_education;

pub use create_education::create_education_handler;
pub use delete_education::delete_education_handler;
pub use get_education::{get_education_by_id_handler, get_education_handler};
pub use update_education::update_education_handler;
