//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the route table from the validated configuration
//! - Bind the listener and serve until a shutdown signal
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when routes are ready)

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::app::build_router;
use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};

/// Serve the application until SIGINT/SIGTERM.
pub async fn serve(config: AppConfig) -> Result<(), std::io::Error> {
    let config = Arc::new(config);
    let server = HttpServer::new(config.clone(), build_router(config.clone()));

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await
}
