use actix_web::http::{Method, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Relay one request to the backend and mirror its status and body.
///
/// The tail captured after `/api/backend/` is appended to the configured
/// base URL. The backend's response body comes back as text under an
/// `application/json` content type even when it is empty or not valid
/// JSON; interpreting it is the caller's problem, not the proxy's.
async fn forward(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tail = path.into_inner();
    let method = req.method();

    // Only the verbs that carry a payload forward one; a body smuggled
    // onto GET/DELETE is dropped.
    let carries_body =
        *method == Method::POST || *method == Method::PUT || *method == Method::PATCH;
    let outbound_body = if carries_body && !body.is_empty() {
        Some(body.to_vec())
    } else {
        None
    };

    let (status, payload) = app_state
        .upstream
        .forward(method.as_str(), &tail, outbound_body)
        .await?;

    let status = StatusCode::from_u16(status)
        .map_err(|e| AppError::internal(format!("invalid upstream status: {e}")))?;

    Ok(HttpResponse::build(status)
        .content_type("application/json")
        .body(payload))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{path:.*}")
            .route(web::get().to(forward))
            .route(web::post().to(forward))
            .route(web::put().to(forward))
            .route(web::delete().to(forward))
            .route(web::patch().to(forward)),
    );
}
