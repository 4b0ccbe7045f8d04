//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum app with a single catch-all handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Dispatch every request to the routing engine

use axum::{
    extract::State,
    http::{HeaderName, Method, Uri},
    response::Response,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::app::AppRouter;
use crate::config::AppConfig;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::http::response;

/// Application state injected into the catch-all handler.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<AppRouter>,
}

/// HTTP front end for the router.
pub struct HttpServer {
    app: Router,
    config: Arc<AppConfig>,
}

impl HttpServer {
    /// Create a server that dispatches through `router`.
    pub fn new(config: Arc<AppConfig>, router: AppRouter) -> Self {
        tracing::info!(routes = router.route_count(), "Router ready");

        let state = AppState {
            router: Arc::new(router),
        };
        let app = Self::build_app(&config, state);
        Self { app, config }
    }

    /// Build the Axum app with all middleware layers.
    #[allow(deprecated)]
    fn build_app(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(
                        HeaderName::from_static(X_REQUEST_ID),
                        MakeRequestUuid,
                    ))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID)))
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// The assembled Axum app.
    pub fn app(&self) -> Router {
        self.app.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            app = %self.config.app.name,
            "HTTP server starting"
        );

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Catch-all handler.
/// Hands the raw method and request target to the router.
async fn dispatch_handler(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let target = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    match state.router.dispatch(method.as_str(), target) {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(method = %method, target = %target, error = %e, "Handler failed");
            response::internal_error()
        }
    }
}
