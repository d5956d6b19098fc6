//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (IntoResponse)
//!
//! # Error Types
//!
//! - `StoreError` - Credential store failures (duplicate, unavailable)
//! - `HashError` - Password hasher failures
//! - `SessionError` - Session state machine violations
//! - `RegisterError` / `LoginError` - Typed outcomes of the credential services
//! - `BackendError` - Errors that end a request with an error response
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse` from Axum, so handlers can return
//! it directly. Rejections never reach it: the dispatch layer turns them into
//! redirects before that point.
//!
//! # Example
//!
//! ```rust,no_run
//! use sessiongate::backend::error::BackendError;
//! use axum::response::Response;
//!
//! # async fn example() -> Result<Response, BackendError> {
//! // Handler can return BackendError directly
//! # Ok(Response::new("OK".into()))
//! # }
//! ```

pub mod types;

pub mod conversion;

// Re-export commonly used types
pub use types::{
    BackendError, HashError, LoginError, RegisterError, SessionError, StoreError,
};
