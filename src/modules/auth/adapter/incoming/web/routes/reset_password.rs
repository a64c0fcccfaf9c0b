use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::reset_password::{
    ResetPasswordCommand, ResetPasswordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordDto {
    /// Token from the emailed reset link
    pub token: String,

    /// Replacement password
    pub new_password: String,
}

#[derive(Serialize)]
struct PasswordResetBody {
    message: &'static str,
}

/// Complete a password reset
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = "auth",
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password replaced"),
        (
            status = 400,
            description = "Invalid or expired token, or rejected password",
            body = ErrorResponse
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[post("/api/auth/reset-password")]
pub async fn reset_password_handler(
    req: web::Json<ResetPasswordDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match ResetPasswordCommand::new(dto.token, dto.new_password) {
        Ok(command) => command,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    match data.auth.reset_password.execute(command).await {
        Ok(()) => ApiResponse::success(PasswordResetBody {
            message: "Password updated",
        }),
        Err(ResetPasswordError::InvalidToken) => {
            ApiResponse::bad_request("INVALID_RESET_TOKEN", "Reset token is not valid")
        }
        Err(ResetPasswordError::ExpiredToken) => {
            ApiResponse::bad_request("EXPIRED_RESET_TOKEN", "Reset token has expired")
        }
        Err(ResetPasswordError::WeakPassword(reason)) => {
            ApiResponse::bad_request("WEAK_PASSWORD", &reason.to_string())
        }
        Err(err) => {
            error!("password reset failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
