//! Minimal HTTP request router.
//!
//! Matches a method and request target against registered patterns such as
//! `/users/(id)`, extracts positional path parameters and the query map, and
//! hands them to the first matching handler.

pub mod app;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{RouteParams, Router, RouterError};
