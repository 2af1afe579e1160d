//! Wire DTOs for the session endpoint, plus the auth-change event type.
//!
//! DESIGN
//! ======
//! Only the fields the UI consumes are modeled. Everything else the backend
//! sends is ignored by serde so server-side additions never break hydration.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A signed-in session as reported by `GET /api/auth/session`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// User attached to the session, if the backend resolved one.
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// The user record attached to a [`Session`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Primary email address. Absent for accounts created without one.
    #[serde(default)]
    pub email: Option<String>,
}

impl Session {
    /// Convenience constructor for a session whose user has `email`.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            user: Some(SessionUser { email: Some(email.into()) }),
        }
    }
}

/// Auth-state transitions broadcast to subscribers.
///
/// These never cross the wire; they only travel through the in-process
/// auth-change channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
}
