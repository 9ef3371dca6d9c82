use axum::{Router, routing::get};

pub mod settings;
pub mod system;

/// Router for all authenticated (session-scoped) endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/entitlements", get(system::entitlements))
        .nest("/settings", settings::router())
}
