//! Shared Module
//!
//! This module contains types that do not depend on the server stack: the
//! configuration model, caller-facing validation errors, and the session view
//! handed to the presentation layer.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Session view for the presentation layer
pub mod session;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use session::{SessionView, GUEST_NAME};
