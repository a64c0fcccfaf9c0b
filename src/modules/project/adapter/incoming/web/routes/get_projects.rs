use actix_web::{get, web, Responder};
use tracing::error;

use crate::project::application::use_cases::fetch_projects::GetProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public list for the portfolio page.
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_list.execute().await {
        Ok(projects) => ApiResponse::success(projects),
        Err(err) => {
            error!("listing projects failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/projects/{id}")]
pub async fn get_project_by_id_handler(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    match data.project.get_single.execute(path.into_inner()).await {
        Ok(project) => ApiResponse::success(project),
        Err(GetProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(err) => {
            error!("fetching project failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
