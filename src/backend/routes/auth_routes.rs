/**
 * Authentication Routes
 *
 * # Routes
 *
 * - `GET /` - Greeting with the display name
 * - `GET /register` / `POST /register` - Registration form and submission
 * - `GET /login` / `POST /login` - Login form and submission
 * - `GET|POST /logout` - End the session
 * - `GET /api/session` - Display name and logged-in flag as JSON
 */

use axum::{
    routing::get,
    Router,
};

use crate::backend::auth::handlers::{
    get_session, home, login, login_page, logout, register_page, signup,
};
use crate::backend::server::state::AppState;

pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(home))
        .route("/register", get(register_page).post(signup))
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout).post(logout))
        .route("/api/session", get(get_session))
}
