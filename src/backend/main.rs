/**
 * SessionGate Server Entry Point
 *
 * Loads configuration, opens the credential store, and serves the gateway
 * until Ctrl-C. The session purge task and the session manager are torn down
 * after the server has drained.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = sessiongate::backend::server::load_config()?;

    let (app, state) = sessiongate::backend::server::create_app(&config).await;

    let purge_task = sessiongate::backend::server::spawn_session_purge(
        state.sessions.clone(),
        config.session_purge_interval,
    );

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    purge_task.abort();
    let remaining = state.sessions.session_count().await;
    drop(state);
    tracing::info!("Server stopped; {} sessions discarded", remaining);

    Ok(())
}

#[cfg(feature = "ssr")]
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin sessiongate-server --features ssr");
    std::process::exit(1);
}
