//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes per HTTP method, in registration order
//! - Look up the first route matching a request target
//! - Invoke the matched handler, or the not-found fallback
//!
//! # Design Decisions
//! - Built once at startup, read-only afterwards (`&self` dispatch, share via `Arc`)
//! - O(1) method lookup via HashMap, O(n) pattern scan within a method
//! - First match wins; later overlapping routes are unreachable
//! - Explicit no-match reasons from `resolve`, collapsed into the fallback by `dispatch`

use std::collections::HashMap;
use std::fmt;

use crate::routing::params::{parse_query, split_target, RouteParams};
use crate::routing::pattern::PathMatcher;
use crate::routing::RouterError;

/// Something that can serve a matched route.
pub trait Handler<R>: Send + Sync {
    fn call(&self, params: RouteParams) -> R;
}

impl<F, R> Handler<R> for F
where
    F: Fn(RouteParams) -> R + Send + Sync,
{
    fn call(&self, params: RouteParams) -> R {
        self(params)
    }
}

/// A registered route with its compiled matcher.
pub struct Route<R> {
    pub method: String,
    pub pattern: String,
    matcher: PathMatcher,
    handler: Box<dyn Handler<R>>,
}

impl<R> Route<R> {
    pub fn matcher(&self) -> &PathMatcher {
        &self.matcher
    }

    /// Invoke the handler directly.
    pub fn call(&self, params: RouteParams) -> R {
        self.handler.call(params)
    }
}

impl<R> fmt::Debug for Route<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("pattern", &self.pattern)
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

/// Outcome of a successful lookup.
#[derive(Debug)]
pub struct Resolved<'a, R> {
    pub route: &'a Route<R>,
    pub params: RouteParams,
}

type NotFound<R> = Box<dyn Fn() -> R + Send + Sync>;

/// Method + path router.
pub struct Router<R> {
    routes: HashMap<String, Vec<Route<R>>>,
    not_found: NotFound<R>,
}

impl<R> Router<R> {
    /// Create an empty router with the fallback used when nothing matches.
    pub fn new<F>(not_found: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        Self {
            routes: HashMap::new(),
            not_found: Box::new(not_found),
        }
    }

    /// Register a route. The method is used verbatim; the pattern is compiled now
    /// and a malformed one simply never matches.
    pub fn add_route<H>(&mut self, method: impl Into<String>, pattern: impl Into<String>, handler: H)
    where
        H: Handler<R> + 'static,
    {
        let method = method.into();
        let pattern = pattern.into();
        let matcher = PathMatcher::compile(&pattern);

        tracing::debug!(
            method = %method,
            pattern = %pattern,
            params = matcher.dynamic_segments(),
            "Route registered"
        );

        self.routes.entry(method.clone()).or_default().push(Route {
            method,
            pattern,
            matcher,
            handler: Box::new(handler),
        });
    }

    /// Find the first route matching `method` and `uri` without invoking it.
    pub fn resolve(&self, method: &str, uri: &str) -> Result<Resolved<'_, R>, RouterError> {
        let routes = self
            .routes
            .get(method)
            .ok_or_else(|| RouterError::UnknownMethod(method.to_string()))?;

        let target = split_target(uri);

        for route in routes {
            if let Some(path) = route.matcher.captures(&target.path) {
                let query = target.query.as_deref().map(parse_query).unwrap_or_default();
                return Ok(Resolved {
                    route,
                    params: RouteParams::new(path, query),
                });
            }
        }

        Err(RouterError::NoMatchingRoute {
            method: method.to_string(),
            path: target.path,
        })
    }

    /// Invoke the first matching handler, or the not-found fallback.
    pub fn dispatch(&self, method: &str, uri: &str) -> R {
        match self.resolve(method, uri) {
            Ok(Resolved { route, params }) => {
                tracing::debug!(
                    method = %method,
                    uri = %uri,
                    pattern = %route.pattern,
                    "Route matched"
                );
                route.call(params)
            }
            Err(reason) => {
                tracing::debug!(method = %method, uri = %uri, reason = %reason, "No route matched");
                (self.not_found)()
            }
        }
    }

    /// Routes registered for a method, in registration order.
    pub fn routes_for(&self, method: &str) -> &[Route<R>] {
        self.routes.get(method).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn route_count(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.route_count() == 0
    }
}

impl<R> fmt::Debug for Router<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}
