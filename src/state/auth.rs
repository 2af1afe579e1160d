//! Authorization flag derived from the current session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation bar gates the "List" action on whether the signed-in user
//! belongs to the institution. The flag is recomputed from a fresh session
//! read on mount and on every auth-change notification.
//!
//! CONCURRENCY
//! ===========
//! Session reads are async and may resolve out of order. Each refresh takes a
//! ticket from [`AuthorizationTracker`]; a result is applied only when its
//! ticket is newer than the last applied one and the owning component is
//! still alive.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::net::auth_service::AuthService;
use crate::net::types::{Session, SessionUser};

/// Email suffix that marks an institutional account.
pub const INSTITUTION_EMAIL_SUFFIX: &str = "@ashland.edu";

/// The three shapes a session read can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionRead<'a> {
    NoSession,
    NoEmail,
    Email(&'a str),
}

impl<'a> SessionRead<'a> {
    pub fn of(session: Option<&'a Session>) -> Self {
        match session {
            None => Self::NoSession,
            Some(Session { user: None }) => Self::NoEmail,
            Some(Session { user: Some(SessionUser { email: None }) }) => Self::NoEmail,
            Some(Session { user: Some(SessionUser { email: Some(email) }) }) => Self::Email(email),
        }
    }
}

/// `true` iff the session carries an email ending in the institution suffix
/// (case-insensitive).
pub fn is_authorized(session: Option<&Session>) -> bool {
    match SessionRead::of(session) {
        SessionRead::NoSession | SessionRead::NoEmail => false,
        SessionRead::Email(email) => email.to_lowercase().ends_with(INSTITUTION_EMAIL_SUFFIX),
    }
}

/// Ticket identifying one in-flight refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// Orders refresh results and drops those that arrive stale or after teardown.
#[derive(Debug)]
pub struct AuthorizationTracker {
    issued: AtomicU64,
    applied: AtomicU64,
    alive: AtomicBool,
}

impl Default for AuthorizationTracker {
    fn default() -> Self {
        Self {
            issued: AtomicU64::new(0),
            applied: AtomicU64::new(0),
            alive: AtomicBool::new(true),
        }
    }
}

impl AuthorizationTracker {
    /// Start a refresh. Tickets are strictly increasing, starting at 1.
    pub fn begin(&self) -> RefreshTicket {
        RefreshTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Claim the right to publish the result for `ticket`.
    ///
    /// Returns `false` when the tracker was retired or a newer ticket has
    /// already been applied.
    pub fn accept(&self, ticket: RefreshTicket) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.applied.fetch_max(ticket.0, Ordering::SeqCst) < ticket.0
    }

    /// Mark the owner as torn down; every later `accept` fails.
    pub fn retire(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }
}

/// Fetch the session, failing closed to "no session" on error.
///
/// Returns `None` when the result must be discarded (stale or torn down).
pub async fn refresh_session(
    service: &dyn AuthService,
    tracker: &AuthorizationTracker,
) -> Option<Option<Session>> {
    let ticket = tracker.begin();
    let result = service.current_session().await;
    #[cfg(feature = "hydrate")]
    if let Err(e) = &result {
        log::warn!("session fetch failed, treating as signed out: {e}");
    }
    if tracker.accept(ticket) {
        Some(result.unwrap_or_default())
    } else {
        #[cfg(feature = "hydrate")]
        log::debug!("discarding stale session result {ticket:?}");
        None
    }
}

/// Fetch the session and compute the authorization flag.
///
/// Returns `None` when the result must be discarded (stale or torn down).
pub async fn refresh_authorization(
    service: &dyn AuthService,
    tracker: &AuthorizationTracker,
) -> Option<bool> {
    refresh_session(service, tracker)
        .await
        .map(|session| is_authorized(session.as_ref()))
}
