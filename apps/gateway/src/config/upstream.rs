use std::env;
use std::time::Duration;

/// Default backend origin, matching the local docker-compose setup.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080/zenith-financial";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Configuration for the outbound backend client.
///
/// Read once at startup and handed to [`crate::upstream::UpstreamClient`];
/// handlers never touch the environment themselves.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL the proxy forwards to; path segments are appended to it
    pub base_url: String,
    /// Full request timeout (connect + response)
    pub timeout: Duration,
    /// Connection timeout (TCP + TLS handshake)
    pub connect_timeout: Duration,
}

impl UpstreamConfig {
    /// Build the configuration from environment variables.
    ///
    /// - `BACKEND_URL` (default `http://localhost:8080/zenith-financial`)
    /// - `BACKEND_TIMEOUT_SECS` (default 30)
    /// - `BACKEND_CONNECT_TIMEOUT_SECS` (default 5)
    ///
    /// Unparseable timeout values fall back to the defaults.
    pub fn from_env() -> Self {
        let base_url = env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

        let timeout_secs: u64 = env::var("BACKEND_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let connect_timeout_secs: u64 = env::var("BACKEND_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        }
    }

    /// Create a config pointed at the given base URL, with default timeouts.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::time::Duration;

    use serial_test::serial;

    use super::{UpstreamConfig, DEFAULT_BACKEND_URL};

    fn clear_test_env() {
        env::remove_var("BACKEND_URL");
        env::remove_var("BACKEND_TIMEOUT_SECS");
        env::remove_var("BACKEND_CONNECT_TIMEOUT_SECS");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_test_env();
        let config = UpstreamConfig::from_env();
        assert_eq!(config.base_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        env::set_var("BACKEND_URL", "http://backend.internal:9000/api");
        env::set_var("BACKEND_TIMEOUT_SECS", "60");
        env::set_var("BACKEND_CONNECT_TIMEOUT_SECS", "10");

        let config = UpstreamConfig::from_env();
        assert_eq!(config.base_url, "http://backend.internal:9000/api");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));

        clear_test_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_timeout_falls_back() {
        clear_test_env();
        env::set_var("BACKEND_TIMEOUT_SECS", "not-a-number");

        let config = UpstreamConfig::from_env();
        assert_eq!(config.timeout, Duration::from_secs(30));

        clear_test_env();
    }

    #[test]
    fn test_with_base_url() {
        let config = UpstreamConfig::with_base_url("http://127.0.0.1:4000");
        assert_eq!(config.base_url, "http://127.0.0.1:4000");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
