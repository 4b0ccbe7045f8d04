//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → schema.rs (environment overrides)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → shared via Arc with the handlers that need it
//! ```
//!
//! # Design Decisions
//! - Config is constructed once at startup and injected, never a global
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{AppConfig, AppInfo, ListenerConfig, ObservabilityConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
