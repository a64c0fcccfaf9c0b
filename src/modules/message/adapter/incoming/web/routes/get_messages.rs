use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::message::application::use_cases::InboxError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/messages")]
pub async fn get_messages_handler(_user: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.message.get_list.execute().await {
        Ok(messages) => ApiResponse::success(messages),
        Err(err) => {
            error!("listing messages failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

/// Registered before `/api/messages/{id}` so the literal segment wins.
#[get("/api/messages/unread-count")]
pub async fn unread_count_handler(_user: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.message.unread_count.execute().await {
        Ok(count) => ApiResponse::success(count),
        Err(err) => {
            error!("unread count failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/messages/{id}")]
pub async fn get_message_by_id_handler(
    _user: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    match data.message.get_single.execute(path.into_inner()).await {
        Ok(message) => ApiResponse::success(message),
        Err(InboxError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }
        Err(err) => {
            error!("fetching message failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
