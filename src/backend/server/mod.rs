//! Server Module
//!
//! This module contains the server-side code for initializing and configuring
//! the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Configuration loading from the environment, store opening
//! - **`init`** - Server initialization, app creation, background purge task
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `load_config()` reads the environment
//! 2. **Store Opening**: `load_database()` connects PostgreSQL or SQLite
//! 3. **State Creation**: hasher, session manager, cookie settings
//! 4. **Router Creation**: routes, session middleware, cookie and trace layers
//!
//! # Example
//!
//! ```rust,no_run
//! use sessiongate::backend::server::{create_app, load_config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let (app, _state) = create_app(&config).await;
//! # Ok(())
//! # }
//! ```

pub mod state;

pub mod config;

pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use config::load_config;
pub use init::{create_app, spawn_session_purge};
