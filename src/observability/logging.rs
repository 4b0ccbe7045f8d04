//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Pick the default filter from configuration
//!
//! # Design Decisions
//! - `RUST_LOG` wins when set
//! - The dev environment logs at debug regardless of the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Default filter directives derived from configuration.
pub fn default_directives(config: &AppConfig) -> String {
    let level = if config.is_dev() {
        "debug".to_string()
    } else {
        config.observability.log_level.to_lowercase()
    };
    format!("path_router={level},tower_http={level}")
}

/// Install the global subscriber.
pub fn init(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(config).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
