//! Authentication Handlers Module
//!
//! The dispatch layer: thin HTTP handlers that call the credential services
//! and map each typed outcome to a redirect or an error response.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Form bodies
//! ├── signup.rs   - POST /register
//! ├── login.rs    - POST /login
//! ├── logout.rs   - GET|POST /logout
//! ├── me.rs       - GET / and GET /api/session
//! └── pages.rs    - GET /register and GET /login forms
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{routing::get, Router};
//! use sessiongate::backend::auth::handlers::{login, login_page, logout};
//! use sessiongate::backend::server::AppState;
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/login", get(login_page).post(login))
//!     .route("/logout", get(logout).post(logout));
//! ```

pub mod types;

pub mod signup;

pub mod login;

pub mod logout;

pub mod me;

pub mod pages;

// Re-export commonly used types
pub use types::{SignupForm, LoginForm};

// Re-export handlers
pub use signup::signup;
pub use login::login;
pub use logout::logout;
pub use me::{get_session, home};
pub use pages::{login_page, register_page};
