/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, credential store loading, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the credential store (optional)
 * 2. Create the application state (hasher, session manager, cookie settings)
 * 3. Create and configure the router
 *
 * The periodic session purge is started separately by the binary so that it
 * can be stopped together with the server.
 */

use std::time::Duration;

use axum::Router;
use tokio::task::JoinHandle;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::backend::auth::sessions::SessionManager;
use crate::shared::AppConfig;

/// Build the router and the state behind it
pub async fn create_app(config: &AppConfig) -> (Router<()>, AppState) {
    tracing::info!("Initializing sessiongate server");

    let credential_store = load_database(config).await;

    let app_state = AppState::new(config, credential_store);

    tracing::info!(
        "Session manager ready (max age {}s, cookie {:?})",
        config.session_max_age.as_secs(),
        config.session_cookie_name
    );

    let app = create_router(app_state.clone());

    tracing::info!("Router configured");

    (app, app_state)
}

/// Start the background task that drops expired sessions every `interval`
pub fn spawn_session_purge(sessions: SessionManager, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let purged = sessions.purge_expired().await;
            if purged > 0 {
                tracing::debug!("Purged {} expired sessions", purged);
            }
        }
    })
}
