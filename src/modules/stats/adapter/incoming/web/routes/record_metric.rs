use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::stats::domain::entities::Metric;
use crate::AppState;

#[derive(Serialize)]
struct RecordedBody {
    recorded: bool,
}

/// Public counter bumps fired by the portfolio page
/// (`visitor`, `cv-view`, `cv-download`).
#[post("/api/stats/{metric}")]
pub async fn record_metric_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let segment = path.into_inner();

    let Some(metric) = Metric::from_path_segment(&segment) else {
        return ApiResponse::not_found("UNKNOWN_METRIC", "Unknown metric");
    };

    match data.stats.record.execute(metric).await {
        Ok(_) => ApiResponse::success(RecordedBody { recorded: true }),
        Err(err) => {
            error!("recording metric failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
