/**
 * Current Session Handlers
 *
 * `GET /api/session` returns the two values the view layer may read, and
 * `GET /` greets the visitor with the display name.
 */

use axum::response::Json;

use crate::backend::middleware::SessionContext;
use crate::shared::session::SessionView;

/// GET /api/session
pub async fn get_session(session: SessionContext) -> Json<SessionView> {
    Json(session.view)
}

/// GET /
pub async fn home(session: SessionContext) -> String {
    if session.is_logged() {
        format!("Hello, {}!", session.display_name())
    } else {
        format!("Hello, {}! Please log in or register.", session.display_name())
    }
}
