//! Client configuration for the auth session endpoints.
//!
//! Defaults match the routes served by the marketplace backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SESSION_ENDPOINT: &str = "/api/auth/session";
pub const DEFAULT_LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// Endpoint paths used by [`crate::net::auth_service::HttpAuthService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub session_endpoint: String,
    pub logout_endpoint: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_endpoint: DEFAULT_SESSION_ENDPOINT.to_owned(),
            logout_endpoint: DEFAULT_LOGOUT_ENDPOINT.to_owned(),
        }
    }
}
