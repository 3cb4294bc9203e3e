use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::trace_ctx;

/// Envelope for session-boundary failures: `{"error": "..."}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Envelope the UI expects when the backend cannot be reached:
/// `{"code": "PROXY_ERROR", "messages": [...]}`.
#[derive(Serialize)]
struct ProxyErrorBody {
    code: String,
    messages: Vec<String>,
}

/// User-facing message carried in the PROXY_ERROR envelope. The UI surfaces
/// it verbatim when the backend supplied no envelope of its own.
const UPSTREAM_ERROR_MESSAGE: &str = "Error de conexión con el servidor";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing tokens")]
    MissingTokens,
    #[error("Upstream error: {detail}")]
    Upstream { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Stable machine-readable code for logs and the proxy envelope.
    fn code(&self) -> &'static str {
        match self {
            AppError::MissingTokens => "MISSING_TOKENS",
            AppError::Upstream { .. } => "PROXY_ERROR",
            AppError::Internal { .. } => "INTERNAL",
            AppError::Config { .. } => "CONFIG_ERROR",
        }
    }

    /// Internal detail for logs. Never serialized into a response body.
    fn detail(&self) -> String {
        match self {
            AppError::MissingTokens => "Tokens are required".to_string(),
            AppError::Upstream { detail }
            | AppError::Internal { detail }
            | AppError::Config { detail } => detail.clone(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingTokens => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn missing_tokens() -> Self {
        Self::MissingTokens
    }

    pub fn upstream(detail: String) -> Self {
        Self::Upstream { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::internal(format!("env var error: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            tracing::error!(
                code = self.code(),
                detail = %self.detail(),
                trace_id = %trace_id,
                message = "request_failed"
            );
        }

        let mut builder = HttpResponse::build(status);
        builder
            .content_type("application/json")
            .insert_header(("x-trace-id", trace_id));

        match self {
            AppError::Upstream { .. } => builder.json(ProxyErrorBody {
                code: self.code().to_string(),
                messages: vec![UPSTREAM_ERROR_MESSAGE.to_string()],
            }),
            AppError::MissingTokens => builder.json(ErrorBody {
                error: "Tokens are required".to_string(),
            }),
            AppError::Internal { .. } | AppError::Config { .. } => builder.json(ErrorBody {
                error: "Internal server error".to_string(),
            }),
        }
    }
}
