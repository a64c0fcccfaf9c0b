use actix_web::{get, put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::auth::application::use_cases::user_bio::{BioError, UpdateBioCommand};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct UpdateBioRequest {
    pub bio: Option<String>,
    pub info: Option<String>,
}

/// Public: the portfolio page renders this without authentication.
#[get("/api/user/bio")]
pub async fn get_user_bio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.auth.fetch_bio.execute().await {
        Ok(view) => ApiResponse::success(view),
        Err(err) => map_bio_error(err),
    }
}

#[put("/api/user/bio")]
pub async fn update_user_bio_handler(
    user: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<UpdateBioRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match UpdateBioCommand::new(payload.bio, payload.info) {
        Ok(command) => command,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    match data.auth.update_bio.execute(user.user_id, command).await {
        Ok(view) => ApiResponse::success(view),
        Err(err) => map_bio_error(err),
    }
}

fn map_bio_error(err: BioError) -> actix_web::HttpResponse {
    match err {
        BioError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        BioError::RepositoryError(msg) => {
            error!("bio operation failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
