use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;

use crate::shared::storage::JsonStore;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    data_dir: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks the data directory is writable (the only dependency).
#[get("/ready")]
pub async fn readiness(store: web::Data<Arc<JsonStore>>) -> impl Responder {
    let probe = store.root().join(".readiness-probe");

    let data_dir_status = match tokio::fs::write(&probe, b"ok").await {
        Ok(_) => {
            let _ = tokio::fs::remove_file(&probe).await;
            "ok"
        }
        Err(_) => "unhealthy",
    };

    if data_dir_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            data_dir: data_dir_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            data_dir: data_dir_status,
        })
    }
}
