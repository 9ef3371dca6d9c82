use axum::{Extension, Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

use tenantcrm_auth::{RequestContext, Session};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(Extension(ctx): Extension<RequestContext>) -> Json<RequestContext> {
    Json(ctx)
}

/// Feature flags for the client entitlements provider.
pub async fn entitlements(Extension(session): Extension<Session>) -> impl IntoResponse {
    Json(json!({ "features": session.features() }))
}
