//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured fields: method, pattern, request id)
//!
//! Consumers:
//!     → logging.rs (fmt subscriber to stdout)
//! ```
//!
//! # Design Decisions
//! - Structured logging via `tracing`
//! - Request ID flows through the HTTP trace spans
//! - `RUST_LOG` overrides the configured level

pub mod logging;
