use actix_multipart::form::{text::Text, MultipartForm};
use actix_web::{put, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::project::adapter::incoming::web::routes::{read_image_upload, ProjectFormData};
use crate::project::application::use_cases::update_project::{
    UpdateProjectCommand, UpdateProjectError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    _user: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
    MultipartForm(form): MultipartForm<ProjectFormData>,
) -> impl Responder {
    let project_id = path.into_inner();

    let command = match UpdateProjectCommand::new(
        form.title.map(Text::into_inner),
        form.description.map(Text::into_inner),
        form.technologies.map(Text::into_inner),
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

    match data.project.update.execute(project_id, command, image).await {
        Ok(project) => ApiResponse::success(project),
        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(UpdateProjectError::RejectedImage(reason)) => {
            ApiResponse::bad_request("REJECTED_IMAGE", &reason.to_string())
        }
        Err(err) => {
            error!("project update failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::auth::application::ports::outgoing::TokenProvider;
    use crate::project::application::use_cases::create_project::ImageUpload;
    use crate::project::application::use_cases::update_project::UpdateProjectUseCase;
    use crate::project::domain::entities::Project;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubTokenProvider;

    #[derive(Clone)]
    struct NotFoundUpdate;

    #[async_trait]
    impl UpdateProjectUseCase for NotFoundUpdate {
        async fn execute(
            &self,
            _: i64,
            _: UpdateProjectCommand,
            _: Option<ImageUpload>,
        ) -> Result<Project, UpdateProjectError> {
            Err(UpdateProjectError::NotFound)
        }
    }

    const BOUNDARY: &str = "----test-boundary";

    fn empty_multipart() -> String {
        format!("--{}--\r\n", BOUNDARY)
    }

    #[actix_web::test]
    async fn updating_missing_project_returns_not_found() {
        let state = TestAppStateBuilder::default()
            .with_update_project(NotFoundUpdate)
            .build();
        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::valid(1));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/projects/12345")
            .insert_header(("Authorization", "Bearer test-token"))
            .insert_header((
                "Content-Type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(empty_multipart())
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "PROJECT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn update_without_token_is_unauthorized() {
        let state = TestAppStateBuilder::default().build();
        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::valid(1));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/projects/12345")
            .insert_header((
                "Content-Type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(empty_multipart())
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
