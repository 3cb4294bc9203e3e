//! Outbound client for the financial backend.
//!
//! The proxy issues exactly one outbound call per inbound request. Transport
//! failures (connect, timeout, body read) all collapse into
//! [`AppError::Upstream`] so the caller sees the single PROXY_ERROR envelope
//! regardless of what went wrong on the wire. Backend 4xx/5xx responses are
//! not failures; their status and body pass through untouched.

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::upstream::UpstreamConfig;
use crate::error::AppError;

/// Pooled HTTP client bound to the configured backend origin.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    pub fn new(config: UpstreamConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| AppError::config(format!("upstream client build error: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Forward one request to `<base_url>/<tail>` and return the backend's
    /// status and body text verbatim.
    ///
    /// `Content-Type: application/json` is always set on the outbound
    /// request; no other inbound headers are relayed. `body` is sent
    /// unmodified when present.
    pub async fn forward(
        &self,
        method: &str,
        tail: &str,
        body: Option<Vec<u8>>,
    ) -> Result<(u16, String), AppError> {
        let method = reqwest::Method::from_bytes(method.as_bytes())
            .map_err(|e| AppError::internal(format!("invalid proxy method: {e}")))?;
        let url = target_url(&self.config.base_url, tail);

        debug!(method = %method, url = %url, "forwarding request upstream");

        let mut request = self
            .client
            .request(method, &url)
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| self.classify_error(e))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| self.classify_error(e))?;

        Ok((status, text))
    }

    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            warn!(
                url = %self.config.base_url,
                timeout_secs = self.config.timeout.as_secs(),
                "upstream request timed out"
            );
        } else if error.is_connect() {
            warn!(url = %self.config.base_url, "failed to connect to upstream");
        } else {
            warn!(url = %self.config.base_url, error = %error, "upstream request failed");
        }
        AppError::upstream(error.to_string())
    }
}

/// Join the configured base URL and the stripped path tail.
/// An empty tail yields the base URL with a trailing slash.
fn target_url(base: &str, tail: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), tail)
}
