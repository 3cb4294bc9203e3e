use gateway::config::runtime::RuntimeEnv;
use gateway::config::upstream::UpstreamConfig;
use gateway::state::app_state::AppState;
use gateway::state::session_config::SessionConfig;
use gateway::upstream::UpstreamClient;
use gateway::AppError;

/// Build an AppState pointed at the given backend base URL, with dev-mode
/// (non-secure) session cookies.
pub fn build_test_state(base_url: &str) -> Result<AppState, AppError> {
    build_test_state_with_env(base_url, RuntimeEnv::Dev)
}

/// Build an AppState with an explicit runtime environment, for exercising
/// both branches of the cookie `Secure` flag.
pub fn build_test_state_with_env(base_url: &str, env: RuntimeEnv) -> Result<AppState, AppError> {
    let upstream = UpstreamClient::new(UpstreamConfig::with_base_url(base_url))?;
    Ok(AppState::new(upstream, SessionConfig::new(env)))
}
