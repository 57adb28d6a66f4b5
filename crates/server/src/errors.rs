use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// JSON body of every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub detail: String,
}

/// Any failure raised while serving a request. Always rendered as `400 Bad Request`.
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub detail: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>, uri: &Uri) -> Self {
        Self { message: message.into(), detail: format!("uri={}", uri.path()) }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(message = %self.message, detail = %self.detail, "request failed");
        let body = ErrorBody { timestamp: Utc::now(), message: self.message, detail: self.detail };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
