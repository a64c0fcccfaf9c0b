use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LoginUserInfo, RequestPasswordResetDto, ResetPasswordDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "REST backend for the portfolio site and its admin dashboard",
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::request_password_reset_handler,
        crate::auth::adapter::incoming::web::routes::reset_password_handler,

        // Content endpoints
        // get_projects_handler,
        // get_project_by_id_handler,
        // create_project_handler,
        // update_project_handler,
        // delete_project_handler,
        // get_education_handler,
        // create_education_handler,
        // get_skills_handler,
        // create_skill_handler,

        // Inbox endpoints
        // get_messages_handler,
        // contact_handler,
        // unread_count_handler,

        // Stats endpoints
        // get_stats_handler,
        // record_metric_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<LoginResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            RequestPasswordResetDto,
            ResetPasswordDto
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "content", description = "Projects, education and skills"),
        (name = "inbox", description = "Contact messages"),
        (name = "stats", description = "Analytics counters"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
