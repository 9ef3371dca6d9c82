use std::sync::Arc;

use axum::{Extension, Json, Router, routing::get};
use serde_json::{Value, json};

use tenantcrm_auth::{PermissionGate, RequestContext};

use crate::authz;
use crate::config::ApiConfig;

pub fn router() -> Router {
    Router::new().route("/theme", get(theme)).route_layer(
        axum::middleware::from_fn_with_state(
            PermissionGate::new(["settings.read", "settings.admin"]),
            authz::require_perm,
        ),
    )
}

/// GET /settings/theme - branding for the caller's tenant
pub async fn theme(
    Extension(ctx): Extension<RequestContext>,
    Extension(config): Extension<Arc<ApiConfig>>,
) -> Json<Value> {
    Json(json!({
        "tenantId": ctx.tenant_id(),
        "theme": config.theme,
    }))
}
