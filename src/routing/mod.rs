//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Registration (at startup):
//!     add_route(method, pattern, handler)
//!     → pattern.rs (tokenize, compile anchored matcher)
//!     → append to the method's ordered route list
//!
//! Dispatch (per request):
//!     (method, uri)
//!     → router.rs (method lookup)
//!     → params.rs (split path / query)
//!     → pattern.rs (first matching route, positional captures)
//!     → params.rs (decode query)
//!     → handler(RouteParams) or not_found()
//! ```
//!
//! # Design Decisions
//! - Routes compiled at registration, immutable once the router is shared
//! - Deterministic: same input always matches same route
//! - First match wins (registration order)
//! - No match always resolves through the single not-found fallback

pub mod error;
pub mod params;
pub mod pattern;
pub mod router;

pub use error::RouterError;
pub use params::RouteParams;
pub use router::{Handler, Resolved, Route, Router};
