//! path-router service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request      ┌────────┐    ┌──────────────┐    ┌──────────┐
//!     ───────────────────▶│  http  │───▶│   routing    │───▶│   app    │
//!                         │ server │    │ match + args │    │ handlers │
//!     Client Response     └────────┘    └──────┬───────┘    └────┬─────┘
//!     ◀────────────────── JSON envelope ◀──────┴─────────────────┘
//!
//!     Cross-cutting: config (TOML + env), observability (tracing), lifecycle
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use path_router::config::{load_config, validate_config, AppConfig, ConfigError};
use path_router::lifecycle::startup;
use path_router::observability::logging;

const DEFAULT_CONFIG: &str = "config.toml";

#[derive(Parser)]
#[command(name = "path-router")]
#[command(about = "Minimal HTTP request router", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file (defaults to ./config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// Print a configuration value by dot-separated key, or the whole config
    Config { key: Option<String> },
}

fn resolve_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => load_config(Path::new(DEFAULT_CONFIG))?,
        None => AppConfig::default(),
    };

    config.apply_env_overrides(|key| std::env::var(key).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Config { key } => {
            let value = match key.as_deref() {
                Some(key) => config
                    .lookup(key)
                    .ok_or_else(|| format!("Unknown config key: {}", key))?,
                None => toml::Value::try_from(&config)?,
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Commands::Serve => {
            logging::init(&config);
            tracing::info!(
                app = %config.app.name,
                version = %config.app.version,
                environment = %config.app.environment,
                bind_address = %config.listener.bind_address,
                "path-router starting"
            );

            startup::serve(config).await?;
            tracing::info!("Shutdown complete");
        }
    }

    Ok(())
}
