use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    app_version: String,
    upstream: String,
    time: String,
}

/// Liveness probe. Reports the configured backend origin but does not call
/// it; the proxy surfaces backend reachability per request.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let app_version = env!("CARGO_PKG_VERSION").to_string();

    let now = OffsetDateTime::now_utc();
    let time = now
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let response = HealthResponse {
        status: "ok".to_string(),
        app_version,
        upstream: app_state.upstream.base_url().to_string(),
        time,
    };

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("", web::get().to(health));
}
