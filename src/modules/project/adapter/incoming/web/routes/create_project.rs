use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::project::application::use_cases::create_project::{
    CreateProjectCommand, CreateProjectError, ImageUpload,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Multipart form
// ──────────────────────────────────────────────────────────
//

/// Shared by create and update: the dashboard always submits project data as
/// multipart so the image can ride along.
#[derive(Debug, MultipartForm)]
pub struct ProjectFormData {
    pub title: Option<Text<String>>,
    pub description: Option<Text<String>>,
    pub technologies: Option<Text<String>>,
    #[multipart(rename = "githubLink")]
    pub github_link: Option<Text<String>>,
    #[multipart(rename = "liveLink")]
    pub live_link: Option<Text<String>>,
    pub image: Option<TempFile>,
}

/// Pull the uploaded file into memory for the use case. The multipart layer
/// has already spooled it to a temp file.
pub async fn read_image_upload(file: Option<TempFile>) -> Result<Option<ImageUpload>, HttpResponse> {
    let Some(file) = file else {
        return Ok(None);
    };

    let content_type = file
        .content_type
        .as_ref()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_default();

    match tokio::fs::read(file.file.path()).await {
        Ok(bytes) => Ok(Some(ImageUpload {
            bytes,
            content_type,
        })),
        Err(err) => {
            error!("failed to read uploaded image: {}", err);
            Err(ApiResponse::internal_error())
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/projects")]
pub async fn create_project_handler(
    _user: AdminUser,
    data: web::Data<AppState>,
    MultipartForm(form): MultipartForm<ProjectFormData>,
) -> impl Responder {
    let command = match CreateProjectCommand::new(
        form.title.map(Text::into_inner).unwrap_or_default(),
        form.description.map(Text::into_inner).unwrap_or_default(),
        form.technologies
            .map(Text::into_inner)
            .unwrap_or_default()
            .as_str(),
        form.github_link.map(Text::into_inner),
        form.live_link.map(Text::into_inner),
    ) {
        Ok(command) => command,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    let image = match read_image_upload(form.image).await {
        Ok(image) => image,
        Err(response) => return response,
    };

    match data.project.create.execute(command, image).await {
        Ok(project) => ApiResponse::created(project),
        Err(CreateProjectError::RejectedImage(reason)) => {
            ApiResponse::bad_request("REJECTED_IMAGE", &reason.to_string())
        }
        Err(err) => {
            error!("project creation failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
