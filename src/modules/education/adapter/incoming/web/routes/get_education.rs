use actix_web::{get, web, Responder};
use tracing::error;

use crate::education::application::use_cases::EducationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public timeline, newest year first.
#[get("/api/education")]
pub async fn get_education_handler(data: web::Data<AppState>) -> impl Responder {
    match data.education.get_list.execute().await {
        Ok(entries) => ApiResponse::success(entries),
        Err(err) => {
            error!("listing education failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/education/{id}")]
pub async fn get_education_by_id_handler(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    match data.education.get_single.execute(path.into_inner()).await {
        Ok(entry) => ApiResponse::success(entry),
        Err(EducationError::NotFound) => {
            ApiResponse::not_found("EDUCATION_NOT_FOUND", "Education entry not found")
        }
        Err(err) => {
            error!("fetching education entry failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
