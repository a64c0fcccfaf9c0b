use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::education::application::use_cases::{CreateEducationCommand, EducationError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct CreateEducationRequest {
    pub year: i32,
    pub title: String,
    pub institution: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[post("/api/education")]
pub async fn create_education_handler(
    _user: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateEducationRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateEducationCommand::new(
        payload.year,
        payload.title,
        payload.institution,
        payload.highlights,
        payload.skills,
    ) {
        Ok(command) => command,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    match data.education.create.execute(command).await {
        Ok(entry) => ApiResponse::created(entry),
        Err(err) => {
            error!("education creation failed: {}", err);
            map_education_error(err)
        }
    }
}

pub(super) fn map_education_error(err: EducationError) -> actix_web::HttpResponse {
    match err {
        EducationError::NotFound => {
            ApiResponse::not_found("EDUCATION_NOT_FOUND", "Education entry not found")
        }
        EducationError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Arc;

    use crate::auth::application::ports::outgoing::TokenProvider;
    use crate::education::application::use_cases::CreateEducationUseCase;
    use crate::education::domain::entities::EducationEntry;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubTokenProvider;

    #[derive(Clone)]
    struct MockCreate;

    #[async_trait]
    impl CreateEducationUseCase for MockCreate {
        async fn execute(
            &self,
            _: CreateEducationCommand,
        ) -> Result<EducationEntry, EducationError> {
            Ok(EducationEntry {
                id: 5,
                year: 2021,
                title: "MSc".to_string(),
                institution: "MIT".to_string(),
                highlights: vec![],
                skills: vec![],
                created_at: Utc::now(),
                updated_at: None,
            })
        }
    }

    #[actix_web::test]
    async fn create_requires_token() {
        let state = TestAppStateBuilder::default().build();
        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::valid(1));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(create_education_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/education")
            .set_json(serde_json::json!({
                "year": 2021, "title": "MSc", "institution": "MIT"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn create_with_token_returns_created() {
        let state = TestAppStateBuilder::default()
            .with_create_education(MockCreate)
            .build();
        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::valid(1));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(create_education_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/education")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({
                "year": 2021, "title": "MSc", "institution": "MIT"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn implausible_year_is_rejected() {
        let state = TestAppStateBuilder::default().build();
        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::valid(1));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(create_education_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/education")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({
                "year": 1492, "title": "MSc", "institution": "MIT"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
