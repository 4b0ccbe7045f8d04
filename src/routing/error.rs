//! Routing error definitions.

use thiserror::Error;

/// Errors produced while resolving or invoking a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// No routes are registered under the request method.
    #[error("no routes registered for method {0}")]
    UnknownMethod(String),

    /// The method is known but no pattern matched the path.
    #[error("no route matches {method} {path}")]
    NoMatchingRoute { method: String, path: String },

    /// The handler expected a different number of path parameters.
    #[error("handler expects {expected} path parameters, route captured {actual}")]
    ArityMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RouterError::UnknownMethod("DELETE".into());
        assert_eq!(err.to_string(), "no routes registered for method DELETE");

        let err = RouterError::ArityMismatch { expected: 2, actual: 1 };
        assert_eq!(err.to_string(), "handler expects 2 path parameters, route captured 1");
    }
}
