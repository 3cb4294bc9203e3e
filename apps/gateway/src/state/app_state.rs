use super::session_config::SessionConfig;
use crate::upstream::UpstreamClient;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pooled client for the backend the proxy forwards to
    pub upstream: UpstreamClient,
    /// Session cookie policy
    pub session: SessionConfig,
}

impl AppState {
    /// Create a new AppState with the given upstream client and session config
    pub fn new(upstream: UpstreamClient, session: SessionConfig) -> Self {
        Self { upstream, session }
    }
}
