use std::env;

/// Runtime environment the gateway is deployed in.
///
/// Only production hardens the session cookies with the `Secure` flag; local
/// development runs over plain HTTP where the flag would make the browser
/// drop the cookies entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    /// Production deployment
    Prod,
    /// Local development and test runs
    Dev,
}

impl RuntimeEnv {
    /// Read the runtime environment from `APP_ENV` (defaults to `Dev`).
    pub fn from_env() -> Self {
        match env::var("APP_ENV").unwrap_or_default().to_lowercase().as_str() {
            "production" | "prod" => RuntimeEnv::Prod,
            _ => RuntimeEnv::Dev,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, RuntimeEnv::Prod)
    }
}
