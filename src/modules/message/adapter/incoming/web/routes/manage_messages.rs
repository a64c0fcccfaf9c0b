use actix_web::{delete, put, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::message::application::use_cases::InboxError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/messages/{id}/read")]
pub async fn mark_message_read_handler(
    _user: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    match data.message.mark_read.execute(path.into_inner()).await {
        Ok(message) => ApiResponse::success(message),
        Err(InboxError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }
        Err(err) => {
            error!("marking message read failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/messages/{id}")]
pub async fn delete_message_handler(
    _user: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    match data.message.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(InboxError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }
        Err(err) => {
            error!("deleting message failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
