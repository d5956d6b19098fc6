/**
 * Server Configuration
 *
 * This module loads the `AppConfig` from environment variables (after
 * `dotenv` has had a chance to populate them) and opens the optional
 * credential store.
 *
 * # Configuration Sources
 *
 * | Variable | Default |
 * |---|---|
 * | `SERVER_PORT` | 3000 |
 * | `DATABASE_URL` | unset (store disabled) |
 * | `DATABASE_ACQUIRE_TIMEOUT_SECS` | 30 |
 * | `BCRYPT_COST` | 10 |
 * | `SESSION_COOKIE_NAME` | `sid` |
 * | `SESSION_MAX_AGE_MS` | 259200000 |
 * | `SESSION_ANONYMOUS_IDLE_SECS` | 1800 |
 * | `SESSION_COOKIE_SECURE` | false |
 * | `SESSION_PURGE_INTERVAL_SECS` | 300 |
 *
 * # Error Handling
 *
 * A malformed value is a startup error. A store that cannot be reached is
 * logged and the server continues without it; credential endpoints then
 * answer 503 Service Unavailable.
 */

use std::str::FromStr;
use std::time::Duration;

use crate::backend::auth::store::{self, SharedCredentialStore};
use crate::shared::{AppConfig, ConfigError};

/// Credential store configuration result
///
/// `None` if the store is not available.
pub type DatabaseConfig = Option<SharedCredentialStore>;

fn env_value(key: &'static str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_env<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env_value(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

fn parse_bool_env(key: &'static str) -> Result<Option<bool>, ConfigError> {
    match env_value(key) {
        None => Ok(None),
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(ConfigError::InvalidValue { key, value }),
        },
    }
}

/// Read the configuration from the process environment
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut builder = AppConfig::builder();

    if let Some(port) = parse_env::<u16>("SERVER_PORT")? {
        builder = builder.port(port);
    }
    if let Some(url) = env_value("DATABASE_URL") {
        builder = builder.database_url(url);
    }
    if let Some(secs) = parse_env::<u64>("DATABASE_ACQUIRE_TIMEOUT_SECS")? {
        builder = builder.database_acquire_timeout(Duration::from_secs(secs));
    }
    if let Some(cost) = parse_env::<u32>("BCRYPT_COST")? {
        builder = builder.bcrypt_cost(cost);
    }
    if let Some(name) = env_value("SESSION_COOKIE_NAME") {
        builder = builder.session_cookie_name(name);
    }
    if let Some(ms) = parse_env::<u64>("SESSION_MAX_AGE_MS")? {
        builder = builder.session_max_age(Duration::from_millis(ms));
    }
    if let Some(secs) = parse_env::<u64>("SESSION_ANONYMOUS_IDLE_SECS")? {
        builder = builder.session_anonymous_idle(Duration::from_secs(secs));
    }
    if let Some(secure) = parse_bool_env("SESSION_COOKIE_SECURE")? {
        builder = builder.session_cookie_secure(secure);
    }
    if let Some(secs) = parse_env::<u64>("SESSION_PURGE_INTERVAL_SECS")? {
        builder = builder.session_purge_interval(Duration::from_secs(secs));
    }

    builder.build()
}

/// Open the credential store named by the configuration
///
/// Returns `None` if `DATABASE_URL` is not set or the connection fails.
pub async fn load_database(config: &AppConfig) -> DatabaseConfig {
    let database_url = match &config.database_url {
        Some(url) => url,
        None => {
            tracing::warn!("DATABASE_URL not set. Registration and login will be unavailable.");
            return None;
        }
    };

    match store::connect(database_url, config.database_acquire_timeout).await {
        Ok(store) => Some(store),
        Err(e) => {
            tracing::error!("Failed to open credential store: {:?}", e);
            tracing::warn!("Registration and login will be unavailable.");
            None
        }
    }
}
