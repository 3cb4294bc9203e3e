use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};

use crate::config::runtime::RuntimeEnv;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Access tokens live for one hour, refresh tokens for seven days.
const ACCESS_TOKEN_TTL: Duration = Duration::seconds(3600);
const REFRESH_TOKEN_TTL: Duration = Duration::seconds(604_800);

/// Cookie policy for the session boundary.
///
/// Both session cookies are HttpOnly and SameSite=Strict so the tokens are
/// never visible to script code; the `Secure` flag follows the runtime
/// environment.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Whether cookies carry the `Secure` flag
    pub secure: bool,
}

impl SessionConfig {
    /// Create a new SessionConfig for the given runtime environment
    pub fn new(env: RuntimeEnv) -> Self {
        Self {
            secure: env.is_production(),
        }
    }

    /// Cookie binding the short-lived access token to the browser jar.
    pub fn access_cookie(&self, value: String) -> Cookie<'static> {
        self.session_cookie(ACCESS_TOKEN_COOKIE, value, ACCESS_TOKEN_TTL)
    }

    /// Cookie binding the longer-lived refresh token to the browser jar.
    pub fn refresh_cookie(&self, value: String) -> Cookie<'static> {
        self.session_cookie(REFRESH_TOKEN_COOKIE, value, REFRESH_TOKEN_TTL)
    }

    /// Expired counterpart of [`Self::access_cookie`], used by logout.
    pub fn clear_access_cookie(&self) -> Cookie<'static> {
        self.session_cookie(ACCESS_TOKEN_COOKIE, String::new(), Duration::ZERO)
    }

    /// Expired counterpart of [`Self::refresh_cookie`], used by logout.
    pub fn clear_refresh_cookie(&self) -> Cookie<'static> {
        self.session_cookie(REFRESH_TOKEN_COOKIE, String::new(), Duration::ZERO)
    }

    fn session_cookie(&self, name: &'static str, value: String, max_age: Duration) -> Cookie<'static> {
        Cookie::build(name, value)
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Strict)
            .max_age(max_age)
            .path("/")
            .finish()
    }

    /// Create a test SessionConfig with dev-mode (non-secure) cookies
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self { secure: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_cookie_flags() {
        let session = SessionConfig::for_tests();
        let cookie = session.access_cookie("token-value".to_string());

        assert_eq!(cookie.name(), "access_token");
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_refresh_cookie_lives_seven_days() {
        let session = SessionConfig::for_tests();
        let cookie = session.refresh_cookie("token-value".to_string());

        assert_eq!(cookie.name(), "refresh_token");
        assert_eq!(cookie.max_age(), Some(Duration::seconds(604_800)));
    }

    #[test]
    fn test_secure_flag_follows_environment() {
        let prod = SessionConfig::new(RuntimeEnv::Prod);
        let dev = SessionConfig::new(RuntimeEnv::Dev);

        let prod_cookie = prod.access_cookie("v".to_string());
        let dev_cookie = dev.access_cookie("v".to_string());

        assert_eq!(prod_cookie.secure(), Some(true));
        assert!(prod_cookie.to_string().contains("Secure"));
        assert!(!dev_cookie.to_string().contains("Secure"));
    }

    #[test]
    fn test_clear_cookies_expire_immediately() {
        let session = SessionConfig::for_tests();
        for cookie in [session.clear_access_cookie(), session.clear_refresh_cookie()] {
            assert_eq!(cookie.value(), "");
            assert_eq!(cookie.max_age(), Some(Duration::ZERO));
            assert_eq!(cookie.http_only(), Some(true));
            assert_eq!(cookie.path(), Some("/"));
        }
    }
}
