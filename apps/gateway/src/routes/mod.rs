use actix_web::web;

pub mod auth;
pub mod health;
pub mod proxy;

/// Configure application routes for the server and for tests.
///
/// In production, `main.rs` wires these behind CORS, security headers and
/// the logging/tracing middleware. Tests register the same paths without
/// the outer wrappers so that endpoint behavior can be exercised directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check route: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Session boundary: /api/auth/**
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));

    // Transparent relay to the financial backend: /api/backend/**
    cfg.service(web::scope("/api/backend").configure(proxy::configure_routes));
}
