//! REST helpers for the auth session endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`AuthError::Unavailable`] since the
//! session cookie only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is reported as an [`AuthError`]. Callers treat any error as
//! "no session"; the variants exist so the failure can be logged precisely.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Session;

/// Failures talking to the auth backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("session request failed: {0}")]
    Transport(String),
    #[error("session request returned status {0}")]
    Status(u16),
    #[error("malformed session payload: {0}")]
    Decode(String),
    #[error("auth service not available on server")]
    Unavailable,
}

/// Decode a session body. `null` and an empty body both mean "no session".
#[cfg(any(test, feature = "hydrate"))]
fn decode_session(body: &str) -> Result<Option<Session>, AuthError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<Session>>(body).map_err(|e| AuthError::Decode(e.to_string()))
}

/// Map a session endpoint response onto the session it describes.
///
/// 401/403 are the backend's way of saying "signed out", not failures.
#[cfg(any(test, feature = "hydrate"))]
fn session_from_response(status: u16, body: &str) -> Result<Option<Session>, AuthError> {
    match status {
        200..=299 => decode_session(body),
        401 | 403 => Ok(None),
        other => Err(AuthError::Status(other)),
    }
}

/// Fetch the current session from `endpoint`.
///
/// # Errors
///
/// Returns an error if the request fails, the backend answers with an
/// unexpected status, or the body is not a session payload.
pub async fn fetch_session(endpoint: &str) -> Result<Option<Session>, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        session_from_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(AuthError::Unavailable)
    }
}

/// End the current session by calling `POST {endpoint}`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn logout(endpoint: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(AuthError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(AuthError::Unavailable)
    }
}
