use actix_web::{delete, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::education::application::use_cases::EducationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::create_education::map_education_error;

#[delete("/api/education/{id}")]
pub async fn delete_education_handler(
    _user: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    match data.education.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(EducationError::NotFound) => map_education_error(EducationError::NotFound),
        Err(err) => {
            error!("education deletion failed: {}", err);
            map_education_error(err)
        }
    }
}
