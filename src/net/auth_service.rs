//! Authentication service seam consumed by the UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never talk to the session endpoint directly. They read the
//! current session through [`AuthService`] and learn about sign-in/sign-out
//! through a [`Subscription`] on the service's auth-change channel.
//!
//! DESIGN
//! ======
//! A subscription is a scoped acquisition: the listener stays registered
//! exactly as long as the handle lives. Dropping the handle (or calling
//! [`Subscription::unsubscribe`]) releases it, whatever path tore down the
//! owner.

#[cfg(test)]
#[path = "auth_service_test.rs"]
mod auth_service_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use async_trait::async_trait;

pub use super::api::AuthError;
use super::api;
use super::types::{AuthEvent, Session};
use crate::config::AuthConfig;

/// Callback invoked for every auth-state transition.
pub type AuthListener = Arc<dyn Fn(AuthEvent) + Send + Sync>;

/// External authentication service boundary.
#[async_trait(?Send)]
pub trait AuthService: Send + Sync {
    /// Read the current session; `Ok(None)` when signed out.
    async fn current_session(&self) -> Result<Option<Session>, AuthError>;

    /// Register `listener` for auth-state changes until the handle is dropped.
    fn subscribe(&self, listener: AuthListener) -> Subscription;

    /// End the current session and notify subscribers.
    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Shared handle to the app's auth service, provided through Leptos context.
#[derive(Clone)]
pub struct AuthHandle(pub Arc<dyn AuthService>);

impl AuthHandle {
    pub fn new(service: impl AuthService + 'static) -> Self {
        Self(Arc::new(service))
    }

    pub fn service(&self) -> Arc<dyn AuthService> {
        Arc::clone(&self.0)
    }
}

/// In-process registry of auth-change listeners.
#[derive(Default)]
pub struct AuthChannel {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(u64, AuthListener)>>,
}

impl AuthChannel {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register `listener`; it is removed when the returned handle drops.
    pub fn subscribe(self: &Arc<Self>, listener: AuthListener) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().push((id, listener));
        Subscription {
            channel: Arc::downgrade(self),
            id,
            released: false,
        }
    }

    /// Deliver `event` to every listener registered at the time of the call.
    ///
    /// Listeners run outside the registry lock so they may subscribe or
    /// unsubscribe re-entrantly.
    pub fn emit(&self, event: AuthEvent) {
        let snapshot: Vec<AuthListener> = self.lock().iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in snapshot {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.lock().len()
    }

    fn remove(&self, id: u64) {
        self.lock().retain(|(lid, _)| *lid != id);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(u64, AuthListener)>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Registration handle returned by [`AuthChannel::subscribe`].
#[must_use = "dropping a Subscription immediately unsubscribes the listener"]
pub struct Subscription {
    channel: Weak<AuthChannel>,
    id: u64,
    released: bool,
}

impl Subscription {
    /// Release the listener now. Equivalent to dropping the handle.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    pub fn is_active(&self) -> bool {
        !self.released && self.channel.strong_count() > 0
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Some(channel) = self.channel.upgrade() {
            channel.remove(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

/// [`AuthService`] backed by the marketplace REST endpoints.
pub struct HttpAuthService {
    config: AuthConfig,
    channel: Arc<AuthChannel>,
}

impl HttpAuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            channel: AuthChannel::new(),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl AuthService for HttpAuthService {
    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        api::fetch_session(&self.config.session_endpoint).await
    }

    fn subscribe(&self, listener: AuthListener) -> Subscription {
        self.channel.subscribe(listener)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let result = api::logout(&self.config.logout_endpoint).await;
        // Subscribers re-read the session either way; a failed logout leaves
        // them showing whatever the backend still reports.
        self.channel.emit(AuthEvent::SignedOut);
        result
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
