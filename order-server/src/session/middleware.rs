//! Session cookie middleware
//!
//! Resolves the `kopi_session` cookie to a live session (creating one when
//! the cookie is missing, malformed or expired) and injects the
//! [`SessionId`] into request extensions for the handlers.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::{HeaderMap, HeaderValue, header};

use super::store::SessionId;
use crate::core::ServerState;

pub const SESSION_COOKIE: &str = "kopi_session";

pub async fn require_session(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Response {
    let existing = session_from_cookie(req.headers()).filter(|id| state.sessions.contains(id));

    let (id, is_new) = match existing {
        Some(id) => (id, false),
        None => (state.sessions.create(), true),
    };
    req.extensions_mut().insert(id);

    let mut response = next.run(req).await;

    if is_new {
        match HeaderValue::from_str(&session_cookie(&id)) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::error!(error = %e, "Invalid session cookie value"),
        }
    }
    response
}

/// Read the session id from the `Cookie` header(s)
pub fn session_from_cookie(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| value.parse().ok())
}

fn session_cookie(id: &SessionId) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        SESSION_COOKIE, id
    )
}
