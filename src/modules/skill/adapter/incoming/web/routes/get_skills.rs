use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::skill::application::use_cases::SkillError;
use crate::AppState;

#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.get_list.execute().await {
        Ok(skills) => ApiResponse::success(skills),
        Err(err) => {
            error!("listing skills failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/skills/{id}")]
pub async fn get_skill_by_id_handler(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    match data.skill.get_single.execute(path.into_inner()).await {
        Ok(skill) => ApiResponse::success(skill),
        Err(SkillError::NotFound) => ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found"),
        Err(err) => {
            error!("fetching skill failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
