/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layer Order
 *
 * Outermost first:
 * 1. `TraceLayer` - request/response tracing
 * 2. `CookieManagerLayer` - cookie jar for the request
 * 3. Session middleware - resumes or creates the session
 * 4. Routes
 */

use axum::{middleware, Router};
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;

use crate::backend::middleware::session_middleware;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::server::state::AppState;

pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_auth_routes(Router::new());

    // Fallback handler for 404
    let router = router.fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") });

    router
        .layer(middleware::from_fn_with_state(app_state.clone(), session_middleware))
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
