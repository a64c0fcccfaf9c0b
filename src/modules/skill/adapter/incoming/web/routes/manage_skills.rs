use actix_web::{delete, post, put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::skill::application::use_cases::{
    CreateSkillCommand, SkillError, UpdateSkillCommand,
};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct CreateSkillRequest {
    pub name: String,
    pub category: String,
    pub icon: Option<String>,
    pub level: i32,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateSkillRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub level: Option<i32>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

#[post("/api/skills")]
pub async fn create_skill_handler(
    _user: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateSkillRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateSkillCommand::new(
        payload.name,
        payload.category,
        payload.icon,
        payload.level,
        payload.description,
        payload.tags,
    ) {
        Ok(command) => command,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    match data.skill.create.execute(command).await {
        Ok(skill) => ApiResponse::created(skill),
        Err(err) => {
            error!("skill creation failed: {}", err);
            map_skill_error(err)
        }
    }
}

#[put("/api/skills/{id}")]
pub async fn update_skill_handler(
    _user: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateSkillRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match UpdateSkillCommand::new(
        payload.name,
        payload.category,
        payload.icon,
        payload.level,
        payload.description,
        payload.tags,
    ) {
        Ok(command) => command,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    match data.skill.update.execute(path.into_inner(), command).await {
        Ok(skill) => ApiResponse::success(skill),
        Err(SkillError::NotFound) => map_skill_error(SkillError::NotFound),
        Err(err) => {
            error!("skill update failed: {}", err);
            map_skill_error(err)
        }
    }
}

#[delete("/api/skills/{id}")]
pub async fn delete_skill_handler(
    _user: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    match data.skill.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(SkillError::NotFound) => map_skill_error(SkillError::NotFound),
        Err(err) => {
            error!("skill deletion failed: {}", err);
            map_skill_error(err)
        }
    }
}

fn map_skill_error(err: SkillError) -> actix_web::HttpResponse {
    match err {
        SkillError::NotFound => ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found"),
        SkillError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
