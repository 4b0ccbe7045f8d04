//! Request target parsing and the parameters handed to handlers.

use std::collections::HashMap;
use std::str::FromStr;

use axum::http::Uri;

use crate::routing::RouterError;

/// A request target split into path and raw query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: String,
    pub query: Option<String>,
}

/// Split a raw request target (`path?query`) into its parts.
///
/// Absolute-form targets (`scheme://authority/path?query`) go through
/// [`Uri`]; one that fails to parse is taken whole as the path, with no query.
/// Any other target is cut at `#` and split on the first `?`. An empty path
/// becomes `/`.
pub fn split_target(uri: &str) -> Target {
    if !has_scheme(uri) {
        let without_fragment = uri.split_once('#').map_or(uri, |(head, _)| head);
        let (path, query) = match without_fragment.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (without_fragment, None),
        };
        return Target {
            path: non_empty_path(path),
            query,
        };
    }

    match Uri::from_str(uri) {
        Ok(parsed) => Target {
            path: non_empty_path(parsed.path()),
            query: parsed.query().map(str::to_string),
        },
        Err(e) => {
            tracing::debug!(uri = %uri, error = %e, "Unparsable request target, using it as the path");
            Target {
                path: uri.to_string(),
                query: None,
            }
        }
    }
}

/// True when the target starts with `scheme:` (ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )).
fn has_scheme(uri: &str) -> bool {
    let Some((scheme, _)) = uri.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn non_empty_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

/// Parse a form-encoded query string. Later keys overwrite earlier ones.
pub fn parse_query(raw: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}

/// Parameters resolved for a matched route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    /// Captured dynamic segments, left to right.
    pub path: Vec<String>,
    /// Decoded query parameters.
    pub query: HashMap<String, String>,
}

impl RouteParams {
    pub fn new(path: Vec<String>, query: HashMap<String, String>) -> Self {
        Self { path, query }
    }

    /// Positional path parameter.
    pub fn param(&self, index: usize) -> Option<&str> {
        self.path.get(index).map(String::as_str)
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Destructure the path parameters into exactly `N` values.
    ///
    /// Fails with [`RouterError::ArityMismatch`] when the route captured a
    /// different number of segments than the handler expects.
    pub fn positional<const N: usize>(&self) -> Result<[&str; N], RouterError> {
        if self.path.len() != N {
            return Err(RouterError::ArityMismatch {
                expected: N,
                actual: self.path.len(),
            });
        }
        Ok(std::array::from_fn(|i| self.path[i].as_str()))
    }
}
