use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::message::application::services::FixedWindowRateLimiter;
use crate::message::application::use_cases::{SubmitMessageCommand, SubmitMessageError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitMessageRequest {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub project_type: Option<String>,
    pub message: String,
}

/// Shared by `/api/contact` and `/api/messages`: the old site posted to one,
/// the new one to the other.
async fn handle_submission(
    req: HttpRequest,
    data: web::Data<AppState>,
    limiter: web::Data<Arc<FixedWindowRateLimiter>>,
    payload: web::Json<SubmitMessageRequest>,
) -> HttpResponse {
    match req.peer_addr() {
        Some(addr) => {
            if !limiter.allow(addr.ip()) {
                warn!(client = %addr.ip(), "contact submission rate limited");
                return ApiResponse::too_many_requests(
                    "TOO_MANY_REQUESTS",
                    "Too many messages, try again later",
                );
            }
        }
        None => debug!("no peer address on contact submission, skipping rate limit"),
    }

    let payload = payload.into_inner();

    let command = match SubmitMessageCommand::new(
        payload.name,
        payload.email,
        payload.company,
        payload.project_type,
        payload.message,
    ) {
        Ok(command) => command,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    match data.message.submit.execute(command).await {
        Ok(message) => ApiResponse::created(message),
        Err(SubmitMessageError::RepositoryError(msg)) => {
            error!("storing contact message failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/contact")]
pub async fn contact_handler(
    req: HttpRequest,
    data: web::Data<AppState>,
    limiter: web::Data<Arc<FixedWindowRateLimiter>>,
    payload: web::Json<SubmitMessageRequest>,
) -> impl Responder {
    handle_submission(req, data, limiter, payload).await
}

#[post("/api/messages")]
pub async fn submit_message_handler(
    req: HttpRequest,
    data: web::Data<AppState>,
    limiter: web::Data<Arc<FixedWindowRateLimiter>>,
    payload: web::Json<SubmitMessageRequest>,
) -> impl Responder {
    handle_submission(req, data, limiter, payload).await
}
