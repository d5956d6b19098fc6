//! Shared Error Types
//!
//! This module defines error types that are shared between the services and the
//! dispatch layer. These errors describe caller mistakes rather than
//! infrastructure faults.
//!
//! # Error Categories
//!
//! - `ValidationError` - A submitted field failed the minimal input policy
//!
//! # Usage
//!
//! ```rust
//! use sessiongate::shared::error::SharedError;
//!
//! let error = SharedError::validation("username", "must be at least 3 characters");
//! ```
use thiserror::Error;

/// Shared error types for caller-supplied data
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}
