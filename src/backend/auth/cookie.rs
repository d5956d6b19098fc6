/**
 * Session Cookie Transport
 *
 * The session token travels in a single cookie: HttpOnly, `Path=/`,
 * `Max-Age` equal to the session lifetime, `Secure` only when configured,
 * no SameSite attribute.
 */

use std::time::Duration;

use tower_cookies::{Cookie, Cookies};

use crate::shared::AppConfig;

/// Name and attributes of the session cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    name: String,
    max_age: Duration,
    secure: bool,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, max_age: Duration, secure: bool) -> Self {
        Self {
            name: name.into(),
            max_age,
            secure,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.session_cookie_name.clone(),
            config.session_max_age,
            config.session_cookie_secure,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token presented by the client, if any
    pub fn read(&self, cookies: &Cookies) -> Option<String> {
        cookies
            .get(&self.name)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty())
    }

    /// Cookie carrying `token`
    pub fn build(&self, token: &str) -> Cookie<'static> {
        let max_age = i64::try_from(self.max_age.as_secs()).unwrap_or(i64::MAX);

        Cookie::build((self.name.clone(), token.to_string()))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .max_age(time::Duration::seconds(max_age))
            .build()
    }

    /// Hand `token` to the client
    pub fn set(&self, cookies: &Cookies, token: &str) {
        cookies.add(self.build(token));
    }

    /// Tell the client to drop the cookie
    pub fn clear(&self, cookies: &Cookies) {
        cookies.remove(Cookie::build((self.name.clone(), "")).path("/").build());
    }
}
