use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::Next,
    response::Response,
};

use tenantcrm_auth::Session;
use tenantcrm_core::SessionId;

use crate::app::errors;
use crate::session::SessionStore;

#[derive(Clone)]
pub struct SessionState {
    pub store: Arc<dyn SessionStore>,
    pub cookie_name: Arc<str>,
}

/// Attach the caller's [`Session`] to the request, if it has one.
///
/// Never rejects: an absent or unknown session just leaves the extension
/// unset for later gates to decide on.
pub async fn load_session(
    State(state): State<SessionState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(id) = session_cookie(req.headers(), &state.cookie_name) {
        match state.store.load(&id) {
            Some(session) => {
                req.extensions_mut().insert(session);
            }
            None => tracing::debug!("unknown session id presented"),
        }
    }

    next.run(req).await
}

/// Authentication gate: 401 unless a session was loaded.
pub async fn require_session(req: Request<Body>, next: Next) -> Response {
    if req.extensions().get::<Session>().is_none() {
        return errors::unauthorized();
    }

    next.run(req).await
}

fn session_cookie(headers: &HeaderMap, name: &str) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .and_then(|(_, v)| SessionId::new(v.trim()).ok())
}
