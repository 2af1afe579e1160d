//! Bottom navigation bar with auth-aware "List" routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by the app shell beneath the routed page. It highlights the
//! tab owning the current route and sends non-institutional users who try to
//! list an item to the account page instead of the create form.
//!
//! LIFECYCLE
//! =========
//! On mount the bar reads the session once and subscribes to auth changes.
//! Every notification triggers another read. Teardown retires the tracker
//! before releasing the subscription, so a read still in flight can never
//! write into a disposed signal.

#[cfg(test)]
#[path = "navigation_bar_test.rs"]
mod navigation_bar_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::auth_service::{AuthHandle, AuthListener, AuthService};
use crate::net::types::AuthEvent;
use crate::state::auth::AuthorizationTracker;
use crate::util::nav::NavTab;

/// Fixed bottom bar with Feed, List, My Items, and Account buttons.
#[component]
pub fn NavigationBar() -> impl IntoView {
    let auth = expect_context::<AuthHandle>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let authorized = RwSignal::new(false);
    let tracker = Arc::new(AuthorizationTracker::default());

    spawn_authorization_refresh(auth.service(), Arc::clone(&tracker), authorized);

    let listener: AuthListener = {
        let service = auth.service();
        let tracker = Arc::clone(&tracker);
        Arc::new(move |event: AuthEvent| {
            #[cfg(feature = "hydrate")]
            log::debug!("auth state changed ({event:?}); refreshing authorization");
            #[cfg(not(feature = "hydrate"))]
            let _ = event;
            spawn_authorization_refresh(Arc::clone(&service), Arc::clone(&tracker), authorized);
        })
    };
    let subscription = auth.service().subscribe(listener);

    on_cleanup(move || {
        tracker.retire();
        subscription.unsubscribe();
    });

    let buttons = NavTab::ALL
        .into_iter()
        .map(|tab| {
            let navigate = navigate.clone();
            let is_active = move || pathname.with(|path| tab.is_active(path));
            let on_click = move |_ev: leptos::ev::MouseEvent| {
                navigate(tab.destination(authorized.get_untracked()), NavigateOptions::default());
            };

            view! {
                <button
                    type="button"
                    class="nav-bar__btn"
                    class:nav-bar__btn--active=is_active
                    aria-current=move || is_active().then_some("page")
                    on:click=on_click
                >
                    {render_icon(tab)}
                    <span class="nav-bar__label">{tab.label()}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="nav-bar" aria-label="Primary">
            {buttons}
        </nav>
    }
}

/// Re-read the session and publish the flag if the result is still current.
fn spawn_authorization_refresh(
    service: Arc<dyn AuthService>,
    tracker: Arc<AuthorizationTracker>,
    authorized: RwSignal<bool>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let next = crate::state::auth::refresh_authorization(service.as_ref(), &tracker).await;
        if let Some(next) = next {
            authorized.set(next);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (service, tracker, authorized);
    }
}

fn render_icon(tab: NavTab) -> impl IntoView {
    match tab {
        NavTab::Feed => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M3 9.5 L10 3 L17 9.5" />
                <path d="M5.5 8.5 V16 H14.5 V8.5" />
            </svg>
        }
        .into_any(),
        NavTab::List => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="10" r="7" />
                <path d="M10 6.5 V13.5" />
                <path d="M6.5 10 H13.5" />
            </svg>
        }
        .into_any(),
        NavTab::MyItems => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M4 6 H16 L15 17 H5 Z" />
                <path d="M7.5 6 C7.5 3 12.5 3 12.5 6" />
            </svg>
        }
        .into_any(),
        NavTab::Account => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="7" r="3.5" />
                <path d="M3.5 17 C4.5 12.5 15.5 12.5 16.5 17" />
            </svg>
        }
        .into_any(),
    }
}
