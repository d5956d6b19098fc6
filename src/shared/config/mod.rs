//! Application configuration module
//!
//! Provides configuration types for the gateway. Values are usually filled in
//! from the environment by `backend::server::config::load_config`, but the
//! builder is also used directly by tests.

use std::time::Duration;
use thiserror::Error;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Lowest and highest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Default session cookie name
pub const DEFAULT_SESSION_COOKIE_NAME: &str = "sid";

/// Session lifetime: 259,200,000 ms (three days)
pub const DEFAULT_SESSION_MAX_AGE: Duration = Duration::from_millis(259_200_000);

/// Idle lifetime of a session nobody has logged into yet
pub const DEFAULT_SESSION_ANONYMOUS_IDLE: Duration = Duration::from_secs(1800);

/// How often expired sessions are swept out of memory
pub const DEFAULT_SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(300);

/// How long a request waits for a database connection
pub const DEFAULT_DATABASE_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port the HTTP server binds to
    pub port: u16,
    /// Credential store URL (`postgres://...` or `sqlite:...`); `None` disables the store
    pub database_url: Option<String>,
    /// Maximum wait for a pooled database connection
    pub database_acquire_timeout: Duration,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Name of the cookie carrying the session token
    pub session_cookie_name: String,
    /// Fixed session lifetime, also used as the cookie Max-Age
    pub session_max_age: Duration,
    /// Anonymous sessions expire after this much inactivity, never later than `session_max_age`
    pub session_anonymous_idle: Duration,
    /// Whether the session cookie is restricted to HTTPS
    pub session_cookie_secure: bool,
    /// Interval of the background expiry sweep
    pub session_purge_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            database_acquire_timeout: DEFAULT_DATABASE_ACQUIRE_TIMEOUT,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            session_cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_string(),
            session_max_age: DEFAULT_SESSION_MAX_AGE,
            session_anonymous_idle: DEFAULT_SESSION_ANONYMOUS_IDLE,
            session_cookie_secure: false,
            session_purge_interval: DEFAULT_SESSION_PURGE_INTERVAL,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::BcryptCostOutOfRange(self.bcrypt_cost));
        }
        if self.session_cookie_name.is_empty()
            || !self
                .session_cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            return Err(ConfigError::InvalidCookieName(
                self.session_cookie_name.clone(),
            ));
        }
        if self.session_max_age.is_zero() {
            return Err(ConfigError::MissingValue("session max age"));
        }
        if self.session_anonymous_idle.is_zero() {
            return Err(ConfigError::MissingValue("anonymous session idle timeout"));
        }
        if self.session_purge_interval.is_zero() {
            return Err(ConfigError::MissingValue("session purge interval"));
        }
        if let Some(url) = &self.database_url {
            if !(url.starts_with("postgres://")
                || url.starts_with("postgresql://")
                || url.starts_with("sqlite:"))
            {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the HTTP port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the credential store URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = Some(url.into());
        self
    }

    /// Set the pool acquire timeout
    pub fn database_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.config.database_acquire_timeout = timeout;
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.bcrypt_cost = cost;
        self
    }

    /// Set the session cookie name
    pub fn session_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.config.session_cookie_name = name.into();
        self
    }

    /// Set the session lifetime
    pub fn session_max_age(mut self, max_age: Duration) -> Self {
        self.config.session_max_age = max_age;
        self
    }

    /// Set the idle lifetime of anonymous sessions
    pub fn session_anonymous_idle(mut self, idle: Duration) -> Self {
        self.config.session_anonymous_idle = idle;
        self
    }

    /// Restrict the session cookie to HTTPS
    pub fn session_cookie_secure(mut self, secure: bool) -> Self {
        self.config.session_cookie_secure = secure;
        self
    }

    /// Set the expiry sweep interval
    pub fn session_purge_interval(mut self, interval: Duration) -> Self {
        self.config.session_purge_interval = interval;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("bcrypt cost {0} outside 4..=31")]
    BcryptCostOutOfRange(u32),
    #[error("invalid cookie name: {0:?}")]
    InvalidCookieName(String),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
