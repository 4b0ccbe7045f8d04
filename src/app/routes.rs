//! Route table for the HTTP service.

use std::sync::Arc;

use crate::app::greet::greet;
use crate::app::welcome::welcome;
use crate::app::AppRouter;
use crate::config::AppConfig;
use crate::http::response;
use crate::routing::RouteParams;

/// Register every application route. Called once at startup.
pub fn build_router(config: Arc<AppConfig>) -> AppRouter {
    let mut router = AppRouter::new(|| Ok(response::not_found()));

    router.add_route("GET", "/", move |_: RouteParams| welcome(&config));
    router.add_route("GET", "/greet/(name)", greet);

    router
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_routes_registered() {
        let router = build_router(Arc::new(AppConfig::default()));
        assert_eq!(router.route_count(), 2);

        let patterns: Vec<_> = router.routes_for("GET").iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["/", "/greet/(name)"]);
    }

    #[test]
    fn test_dispatch_statuses() {
        let router = build_router(Arc::new(AppConfig::default()));

        let status = |method: &str, uri: &str| router.dispatch(method, uri).unwrap().status();
        assert_eq!(status("GET", "/"), StatusCode::OK);
        assert_eq!(status("GET", "/greet/Ada?x=1"), StatusCode::OK);
        assert_eq!(status("GET", "/greet/"), StatusCode::NOT_FOUND);
        assert_eq!(status("POST", "/"), StatusCode::NOT_FOUND);
    }
}
