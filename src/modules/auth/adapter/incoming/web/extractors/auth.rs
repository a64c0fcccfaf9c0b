use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// The authenticated admin, extracted from a bearer token. Every protected
/// route takes this as an argument; failing extraction short-circuits the
/// handler with a 401 envelope.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: i64,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => {
                if claims.token_type != "access" {
                    return ready(Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_TOKEN_TYPE",
                        "Invalid token type",
                    ))));
                }

                ready(Ok(AdminUser {
                    user_id: claims.sub,
                }))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, web, App, Responder};
    use std::sync::Arc;

    use crate::tests::support::auth_helper::test_helpers::create_test_jwt_service;

    #[get("/guarded")]
    async fn guarded(user: AdminUser) -> impl Responder {
        ApiResponse::success(user.user_id)
    }

    async fn call(token: Option<String>) -> actix_web::dev::ServiceResponse {
        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(create_test_jwt_service());

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(token_provider))
                .service(guarded),
        )
        .await;

        let mut req = test::TestRequest::get().uri("/guarded");
        if let Some(token) = token {
            req = req.insert_header(("Authorization", format!("Bearer {}", token)));
        }

        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorized() {
        let resp = call(None).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn garbage_token_is_unauthorized() {
        let resp = call(Some("not.a.jwt".to_string())).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn real_token_passes_and_carries_the_user_id() {
        let token = create_test_jwt_service()
            .generate_access_token(42)
            .expect("token generation");

        let resp = call(Some(token)).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"], 42);
    }
}
