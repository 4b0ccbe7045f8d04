//! JSON response envelope.
//!
//! Every response body has the same shape:
//! `{"message": "...", "status": "success" | "error", "data": ...}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome flag carried in every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Response body shared by all endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub message: String,
    pub status: ResponseStatus,
    pub data: Value,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>, data: Value) -> Self {
        Self {
            message: message.into(),
            status: ResponseStatus::Success,
            data,
        }
    }

    /// Error envelope with an empty data list.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: ResponseStatus::Error,
            data: Value::Array(Vec::new()),
        }
    }

    /// Encode as a JSON HTTP response.
    pub fn into_http(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// The fixed 404 reply used when no route matches.
pub fn not_found() -> Response {
    ApiResponse::error("404 Not Found").into_http(StatusCode::NOT_FOUND)
}

/// Reply used when a handler surfaces an error instead of a response.
pub fn internal_error() -> Response {
    ApiResponse::error("500 Internal Server Error").into_http(StatusCode::INTERNAL_SERVER_ERROR)
}
