//! Request context attachment.
//!
//! Handlers read the resolved identity through
//! `Extension<RequestContext>`; they never look at the raw session.

use axum::{body::Body, http::Request, middleware::Next, response::Response};

use tenantcrm_auth::{RequestContext, Session};

/// Derive a [`RequestContext`] from the loaded session and attach it.
///
/// Always continues to the next stage, whatever the session looks like
/// (including when there is none).
pub async fn attach_ctx(mut req: Request<Body>, next: Next) -> Response {
    let ctx = RequestContext::from_session(req.extensions().get::<Session>());
    req.extensions_mut().insert(ctx);

    next.run(req).await
}
