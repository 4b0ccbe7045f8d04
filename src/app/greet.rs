//! Greeting endpoint.

use axum::http::StatusCode;
use serde_json::json;

use crate::app::HandlerResult;
use crate::http::ApiResponse;
use crate::routing::RouteParams;

/// `GET /greet/(name)`: greets the captured name and echoes the query.
pub fn greet(params: RouteParams) -> HandlerResult {
    let [name] = params.positional::<1>()?;
    Ok(ApiResponse::success(
        format!("Hello, {}", name),
        json!({
            "name": name,
            "query": params.query,
        }),
    )
    .into_http(StatusCode::OK))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouterError;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_greet() {
        let query = HashMap::from([("x".to_string(), "1".to_string())]);
        let response = greet(RouteParams::new(vec!["Ada".into()], query)).unwrap();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ApiResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.message, "Hello, Ada");
        assert_eq!(body.data, json!({"name": "Ada", "query": {"x": "1"}}));
    }

    #[test]
    fn test_greet_wrong_arity() {
        let err = greet(RouteParams::default()).unwrap_err();
        assert_eq!(err, RouterError::ArityMismatch { expected: 1, actual: 0 });
    }
}
