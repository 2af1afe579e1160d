//! Account page: who is signed in, plus sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation bar sends users without an institutional account here.
//! Signing out goes through the shared auth service so every subscriber
//! (including the navigation bar) re-reads the session. Like the navigation
//! bar, the page holds its auth-change subscription only while mounted and
//! drops session reads that resolve after teardown.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::auth_service::{AuthHandle, AuthListener, AuthService};
use crate::net::types::{AuthEvent, Session};
#[cfg(feature = "hydrate")]
use crate::state::auth::refresh_session;
use crate::state::auth::{AuthorizationTracker, INSTITUTION_EMAIL_SUFFIX, SessionRead, is_authorized};

/// Status line describing the session.
pub fn account_status(session: Option<&Session>) -> String {
    match SessionRead::of(session) {
        SessionRead::NoSession => "You are not signed in.".to_owned(),
        SessionRead::NoEmail => "Signed in without an email address.".to_owned(),
        SessionRead::Email(email) => format!("Signed in as {email}."),
    }
}

/// Hint shown when the user cannot list items.
pub fn listing_hint(session: Option<&Session>) -> Option<String> {
    if is_authorized(session) {
        None
    } else {
        Some(format!("Sign in with your {INSTITUTION_EMAIL_SUFFIX} address to list items."))
    }
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<AuthHandle>();
    let session = RwSignal::new(None::<Session>);
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let tracker = Arc::new(AuthorizationTracker::default());

    spawn_session_reload(auth.service(), Arc::clone(&tracker), session);

    // Sign-out (here or elsewhere) arrives as a SignedOut event and reloads
    // the session through the same guarded path.
    let listener: AuthListener = {
        let service = auth.service();
        let tracker = Arc::clone(&tracker);
        Arc::new(move |_event: AuthEvent| {
            spawn_session_reload(Arc::clone(&service), Arc::clone(&tracker), session);
        })
    };
    let subscription = auth.service().subscribe(listener);

    let cleanup_tracker = Arc::clone(&tracker);
    on_cleanup(move || {
        cleanup_tracker.retire();
        subscription.unsubscribe();
    });

    let on_sign_out = move |_ev: leptos::ev::MouseEvent| {
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set("Signing out...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let service = auth.service();
            let tracker = Arc::clone(&tracker);
            leptos::task::spawn_local(async move {
                let result = service.sign_out().await;
                if !tracker.is_alive() {
                    return;
                }
                match result {
                    Ok(()) => info.set(String::new()),
                    Err(e) => info.set(format!("Sign out failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, &tracker);
        }
    };

    let status = move || session.with(|s| account_status(s.as_ref()));
    let hint = move || {
        session
            .with(|s| listing_hint(s.as_ref()))
            .map(|hint| view! { <p class="account-page__hint">{hint}</p> })
    };

    view! {
        <section class="account-page">
            <h1>"Account"</h1>
            <p class="account-page__status">{status}</p>
            {hint}
            <Show when=move || session.with(Option::is_some)>
                <button
                    class="btn account-page__sign-out"
                    disabled=move || busy.get()
                    on:click=on_sign_out.clone()
                >
                    "Sign out"
                </button>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="account-page__message">{move || info.get()}</p>
            </Show>
        </section>
    }
}

/// Re-read the session and publish it if the result is still current.
fn spawn_session_reload(
    service: Arc<dyn AuthService>,
    tracker: Arc<AuthorizationTracker>,
    session: RwSignal<Option<Session>>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(current) = refresh_session(service.as_ref(), &tracker).await {
            session.set(current);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (service, tracker, session);
    }
}
