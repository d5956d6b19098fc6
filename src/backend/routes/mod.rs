//! Route Configuration Module
//!
//! This module configures the HTTP routes of the gateway.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, middleware and layers
//! - **`auth_routes`** - Register, login, logout, home and session endpoints

pub mod router;

pub mod auth_routes;

pub use router::create_router;
