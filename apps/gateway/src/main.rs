use actix_web::{web, App, HttpServer};
use gateway::config::runtime::RuntimeEnv;
use gateway::config::upstream::UpstreamConfig;
use gateway::middleware::cors::cors_middleware;
use gateway::middleware::request_trace::RequestTrace;
use gateway::middleware::security_headers::SecurityHeaders;
use gateway::middleware::structured_logger::StructuredLogger;
use gateway::routes;
use gateway::state::app_state::AppState;
use gateway::state::session_config::SessionConfig;
use gateway::upstream::UpstreamClient;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("GATEWAY_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ GATEWAY_PORT must be a valid port number");
            std::process::exit(1);
        });

    println!("🚀 Starting Zenith Gateway on http://{}:{}", host, port);

    let upstream_config = UpstreamConfig::from_env();
    let session_config = SessionConfig::new(RuntimeEnv::from_env());

    let upstream = match UpstreamClient::new(upstream_config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ Failed to build upstream client: {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Proxying /api/backend to {}", upstream.base_url());

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(AppState::new(upstream, session_config));

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(SecurityHeaders)
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
