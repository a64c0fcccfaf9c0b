use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Admin username
    #[schema(example = "admin")]
    pub username: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT bearer token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    token: String,

    /// Authenticated user information
    user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    /// User id (millisecond timestamp)
    #[schema(example = 1700000000000i64)]
    id: i64,

    /// Username
    #[schema(example = "admin")]
    username: String,

    /// Email address
    #[schema(example = "admin@example.com")]
    email: String,
}

/// Admin login
///
/// Exchanges username and password for a bearer token.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "success": true,
                "data": {
                    "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "user": {
                        "id": 1700000000000i64,
                        "username": "admin",
                        "email": "admin@example.com"
                    }
                }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid username or password"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[post("/api/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.username, dto.password) {
        Ok(request) => request,
        Err(err) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string());
        }
    };

    match data.auth.login.execute(request).await {
        Ok(response) => {
            let body = LoginResponse {
                token: response.token,
                user: LoginUserInfo {
                    id: response.user.id,
                    username: response.user.username,
                    email: response.user.email,
                },
            };
            ApiResponse::success(body)
        }
        Err(LoginError::InvalidCredentials) => {
            warn!("failed login attempt");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }
        Err(err) => {
            error!("login failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
