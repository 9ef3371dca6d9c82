//! HTTP API application wiring (Axum router + middleware stack).
//!
//! Request flow for protected routes:
//! `load_session` → `require_session` → `attach_ctx` → (`require_perm`) → handler.
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::config::ApiConfig;
use crate::session::SessionStore;
use crate::{context, middleware};

pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: ApiConfig, store: Arc<dyn SessionStore>) -> Router {
    let session_state = middleware::SessionState {
        store,
        cookie_name: Arc::from(config.session_cookie.as_str()),
    };

    // Protected routes: require a session, then resolve the request context.
    let protected = routes::router().layer(
        ServiceBuilder::new()
            .layer(Extension(Arc::new(config)))
            .layer(axum::middleware::from_fn(middleware::require_session))
            .layer(axum::middleware::from_fn(context::attach_ctx)),
    );

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .layer(axum::middleware::from_fn_with_state(
            session_state,
            middleware::load_session,
        ))
}
