use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Error body shared by every gate: `{"error": <code>}` and nothing else.
pub fn json_error(status: StatusCode, code: &'static str) -> Response {
    (status, Json(json!({ "error": code }))).into_response()
}

pub fn forbidden() -> Response {
    json_error(StatusCode::FORBIDDEN, "Forbidden")
}

pub fn unauthorized() -> Response {
    json_error(StatusCode::UNAUTHORIZED, "Unauthorized")
}
