//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Custom assertion macros
//! - Store, hasher and session fixtures (including failing stores)
//! - HTTP helpers for driving the router

#[macro_use]
pub mod assertions;
pub mod fixtures;
pub mod http;

// Re-export commonly used utilities
pub use fixtures::*;
pub use http::*;
