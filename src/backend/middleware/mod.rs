//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`session`** - Resumes or creates the session for every request and
//!   exposes it as a `SessionContext` request extension
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, Router};
//! use sessiongate::backend::middleware::session_middleware;
//! use sessiongate::backend::server::AppState;
//!
//! fn wrap(router: Router<AppState>, state: AppState) -> Router<AppState> {
//!     router.layer(middleware::from_fn_with_state(state, session_middleware))
//! }
//! ```

pub mod session;

pub use session::{session_middleware, SessionContext};
