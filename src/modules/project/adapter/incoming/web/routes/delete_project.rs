use actix_web::{delete, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::project::application::use_cases::delete_project::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    _user: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    match data.project.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(err) => {
            error!("project deletion failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
