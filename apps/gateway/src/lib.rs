#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod trace_ctx;
pub mod upstream;

// Re-exports for public API
pub use config::runtime::RuntimeEnv;
pub use config::upstream::UpstreamConfig;
pub use error::AppError;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::security_headers::SecurityHeaders;
pub use middleware::structured_logger::StructuredLogger;
pub use state::app_state::AppState;
pub use state::session_config::SessionConfig;
pub use upstream::UpstreamClient;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    gateway_test_support::logging::init();
}
