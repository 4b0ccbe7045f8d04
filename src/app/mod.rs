//! Application endpoints and route wiring.
//!
//! Handlers return [`HandlerResult`]; an `Err` reaches the HTTP adapter, which
//! logs it and answers 500.

pub mod greet;
pub mod routes;
pub mod welcome;

use axum::response::Response;

use crate::routing::{Router, RouterError};

/// Result produced by every application handler.
pub type HandlerResult = Result<Response, RouterError>;

/// Router specialised for the HTTP service.
pub type AppRouter = Router<HandlerResult>;

pub use routes::build_router;
