//! End-to-end dispatch through the HTTP server.

use std::time::Duration;

use path_router::http::{ApiResponse, ResponseStatus};
use path_router::AppConfig;
use serde_json::json;

mod common;

fn demo_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.app.name = "Demo API".into();
    config.app.version = "2.1.0".into();
    config.app.author = "Ada".into();
    config
}

#[tokio::test]
async fn test_welcome() {
    let server = common::start_server(demo_config()).await;

    let res = common::client().get(server.url("/")).send().await.expect("Server unreachable");
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "application/json");

    let body: ApiResponse = res.json().await.unwrap();
    assert_eq!(body.message, "Welcome to the Demo API");
    assert_eq!(body.status, ResponseStatus::Success);
    assert_eq!(body.data, json!({"name": "Demo API", "version": "2.1.0", "author": "Ada"}));

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_greet_with_query() {
    let server = common::start_server(demo_config()).await;

    let res = common::client()
        .get(server.url("/greet/Ada?x=1&x=2&city=S%C3%A3o+Paulo"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: ApiResponse = res.json().await.unwrap();
    assert_eq!(body.message, "Hello, Ada");
    assert_eq!(
        body.data,
        json!({"name": "Ada", "query": {"x": "2", "city": "São Paulo"}})
    );

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_not_found_cases() {
    let server = common::start_server(demo_config()).await;
    let client = common::client();

    for path in ["/greet", "/greet/", "/greet/Ada/extra", "/nothing/here"] {
        let res = client.get(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), 404, "{}", path);

        let body: ApiResponse = res.json().await.unwrap();
        assert_eq!(body, ApiResponse::error("404 Not Found"));
    }

    // No routes are registered for DELETE.
    let res = client.delete(server.url("/anything")).send().await.unwrap();
    assert_eq!(res.status(), 404);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({"message": "404 Not Found", "status": "error", "data": []}));

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let server = common::start_server(demo_config()).await;
    let client = common::client();

    assert_eq!(client.get(server.url("/")).send().await.unwrap().status(), 200);

    server.shutdown.trigger();
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(client.get(server.url("/")).send().await.is_err());
}
