use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::education::application::use_cases::{EducationError, UpdateEducationCommand};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::create_education::map_education_error;

#[derive(Debug, Deserialize)]
struct UpdateEducationRequest {
    pub year: Option<i32>,
    pub title: Option<String>,
    pub institution: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
}

#[put("/api/education/{id}")]
pub async fn update_education_handler(
    _user: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateEducationRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match UpdateEducationCommand::new(
        payload.year,
        payload.title,
        payload.institution,
        payload.highlights,
        payload.skills,
    ) {
        Ok(command) => command,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    match data.education.update.execute(path.into_inner(), command).await {
        Ok(entry) => ApiResponse::success(entry),
        Err(EducationError::NotFound) => map_education_error(EducationError::NotFound),
        Err(err) => {
            error!("education update failed: {}", err);
            map_education_error(err)
        }
    }
}
