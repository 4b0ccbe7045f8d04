//! Welcome endpoint.

use axum::http::StatusCode;
use serde_json::json;

use crate::app::HandlerResult;
use crate::config::AppConfig;
use crate::http::ApiResponse;

/// `GET /`: identifies the running application.
pub fn welcome(config: &AppConfig) -> HandlerResult {
    let app = &config.app;
    Ok(ApiResponse::success(
        format!("Welcome to the {}", app.name),
        json!({
            "name": app.name,
            "version": app.version,
            "author": app.author,
        }),
    )
    .into_http(StatusCode::OK))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ResponseStatus;

    #[tokio::test]
    async fn test_welcome_body() {
        let mut config = AppConfig::default();
        config.app.name = "Demo API".into();
        config.app.version = "1.0.0".into();
        config.app.author = "Ada".into();

        let response = welcome(&config).unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ApiResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.message, "Welcome to the Demo API");
        assert_eq!(body.status, ResponseStatus::Success);
        assert_eq!(body.data, json!({"name": "Demo API", "version": "1.0.0", "author": "Ada"}));
    }
}
