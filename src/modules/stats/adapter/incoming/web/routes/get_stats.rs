use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Dashboard analytics; not exposed publicly.
#[get("/api/stats")]
pub async fn get_stats_handler(_user: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.stats.fetch.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(err) => {
            error!("fetching stats failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
