use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::request_password_reset::{
    RequestPasswordResetCommand, RequestPasswordResetError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RequestPasswordResetDto {
    /// Account email address
    #[schema(example = "admin@example.com")]
    pub email: String,
}

#[derive(Serialize)]
struct ResetRequestedBody {
    message: &'static str,
}

/// Request a password-reset link
///
/// Always answers 200; whether the address matches an account is not
/// disclosed.
#[utoipa::path(
    post,
    path = "/api/auth/request-password-reset",
    tag = "auth",
    request_body = RequestPasswordResetDto,
    responses(
        (
            status = 200,
            description = "Reset link sent if the address is known",
        ),
        (
            status = 400,
            description = "Malformed email address",
            body = ErrorResponse
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[post("/api/auth/request-password-reset")]
pub async fn request_password_reset_handler(
    req: web::Json<RequestPasswordResetDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match RequestPasswordResetCommand::new(req.into_inner().email) {
        Ok(command) => command,
        Err(err) => return ApiResponse::bad_request("INVALID_EMAIL", &err.to_string()),
    };

    match data.auth.request_password_reset.execute(command).await {
        Ok(()) => ApiResponse::success(ResetRequestedBody {
            message: "If the address is registered, a reset link has been sent",
        }),
        Err(RequestPasswordResetError::EmailFailed(msg)) => {
            error!("reset email delivery failed: {}", msg);
            ApiResponse::internal_error()
        }
        Err(err) => {
            error!("password reset request failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
