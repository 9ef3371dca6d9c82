//! API-side permission gate for routes.
//!
//! Wire it per route with the codes fixed at registration time:
//!
//! ```ignore
//! Router::new()
//!     .route("/settings/theme", get(theme))
//!     .route_layer(axum::middleware::from_fn_with_state(
//!         PermissionGate::new(["settings.read", "settings.admin"]),
//!         authz::require_perm,
//!     ))
//! ```
//!
//! The gate assumes an authentication gate ran before it; without a session
//! the permission set is empty and only an empty requirement passes.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use tenantcrm_auth::{PermissionGate, PermissionSet, Session};

use crate::app::errors;

pub async fn require_perm(
    State(gate): State<PermissionGate>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let granted = req
        .extensions()
        .get::<Session>()
        .map(Session::permission_set)
        .unwrap_or_else(PermissionSet::new);

    match gate.check(&granted) {
        Ok(()) => next.run(req).await,
        Err(_) => errors::forbidden(),
    }
}
