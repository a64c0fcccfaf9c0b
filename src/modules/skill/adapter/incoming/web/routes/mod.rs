mod get_skills;
mod manage_skills;

pub use get_skills::{get_skill_by_id_handler, get_skills_handler};
pub use manage_skills::{create_skill_handler, delete_skill_handler, update_skill_handler};
