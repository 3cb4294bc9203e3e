use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct StoreTokensRequest {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
}

/// Bind a successful login's bearer tokens to HttpOnly session cookies.
///
/// The body is parsed by hand from raw bytes so that a malformed payload
/// maps to a generic 500 while absent, null, or empty token fields map to
/// the 400 "Tokens are required" contract. The tokens end up only in the
/// two Set-Cookie directives, never in the response body.
async fn login(body: web::Bytes, app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let payload: StoreTokensRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::internal(format!("token payload parse error: {e}")))?;

    let access_token = payload.access_token.unwrap_or_default();
    let refresh_token = payload.refresh_token.unwrap_or_default();

    if access_token.is_empty() || refresh_token.is_empty() {
        return Err(AppError::missing_tokens());
    }

    let session = &app_state.session;
    Ok(HttpResponse::Ok()
        .cookie(session.access_cookie(access_token))
        .cookie(session.refresh_cookie(refresh_token))
        .json(SessionResponse { success: true }))
}

/// Symmetric clear operation: expire both session cookies.
async fn logout(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session = &app_state.session;
    Ok(HttpResponse::Ok()
        .cookie(session.clear_access_cookie())
        .cookie(session.clear_refresh_cookie())
        .json(SessionResponse { success: true }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)));
    cfg.service(web::resource("/logout").route(web::post().to(logout)));
}
