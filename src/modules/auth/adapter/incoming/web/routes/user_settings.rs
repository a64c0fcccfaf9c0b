use actix_web::{get, put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::auth::application::use_cases::user_settings::{
    SettingsError, UpdateSettingsCommand, UpdateThemeCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct UpdateSettingsRequest {
    pub theme: String,
    pub cursor: String,
}

#[derive(Debug, Deserialize)]
struct UpdateThemeRequest {
    pub theme: String,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

#[get("/api/user/settings")]
pub async fn get_user_settings_handler(
    user: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.fetch_settings.execute(user.user_id).await {
        Ok(settings) => ApiResponse::success(settings),
        Err(err) => map_settings_error(err),
    }
}

#[put("/api/user/settings")]
pub async fn update_user_settings_handler(
    user: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<UpdateSettingsRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match UpdateSettingsCommand::new(payload.theme, payload.cursor) {
        Ok(command) => command,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    match data.auth.update_settings.execute(user.user_id, command).await {
        Ok(settings) => ApiResponse::success(settings),
        Err(err) => map_settings_error(err),
    }
}

#[put("/api/user/theme")]
pub async fn update_user_theme_handler(
    user: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<UpdateThemeRequest>,
) -> impl Responder {
    let command = match UpdateThemeCommand::new(payload.into_inner().theme) {
        Ok(command) => command,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    match data.auth.update_theme.execute(user.user_id, command).await {
        Ok(settings) => ApiResponse::success(settings),
        Err(err) => map_settings_error(err),
    }
}

fn map_settings_error(err: SettingsError) -> actix_web::HttpResponse {
    match err {
        SettingsError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        SettingsError::RepositoryError(msg) => {
            error!("settings operation failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
