//! Routes compiled only with the `test-helpers` feature, for e2e runs
//! against a disposable data directory. Never enable in production; the
//! startup guard panics if you try.

use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;

use crate::shared::storage::JsonStore;

const COLLECTIONS: &[&str] = &[
    "projects",
    "education",
    "skills",
    "messages",
    "users",
    "stats",
];

#[derive(Serialize)]
struct ResetResponse {
    cleared: Vec<&'static str>,
}

/// Wipe every collection file so each e2e scenario starts clean.
#[post("/test/reset")]
async fn reset_data(store: web::Data<Arc<JsonStore>>) -> impl Responder {
    let mut cleared = Vec::new();

    for name in COLLECTIONS {
        let path = store.root().join(format!("{}.json", name));
        if tokio::fs::remove_file(&path).await.is_ok() {
            cleared.push(*name);
        }
    }

    HttpResponse::Ok().json(ResetResponse { cleared })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(reset_data);
}
