//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation_bar::NavigationBar;
use crate::config::AuthConfig;
use crate::net::auth_service::{AuthHandle, HttpAuthService};
use crate::pages::{account::AccountPage, feed::FeedPage, section::SectionPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth service and mounts the navigation bar beneath
/// the routed page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AuthHandle::new(HttpAuthService::new(AuthConfig::default())));

    view! {
        <Stylesheet id="leptos" href="/pkg/campus-market.css"/>
        <Title text="Campus Market"/>

        <Router>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=FeedPage/>
                    <Route path=StaticSegment("feed") view=FeedPage/>
                    <Route
                        path=StaticSegment("create")
                        view=|| view! { <SectionPage title="List an item"/> }
                    />
                    <Route
                        path=StaticSegment("my-items")
                        view=|| {
                            view! {
                                <SectionPage title="My Items" blurb="Items you have listed appear here."/>
                            }
                        }
                    />
                    <Route path=StaticSegment("me") view=AccountPage/>
                </Routes>
            </main>
            <NavigationBar/>
        </Router>
    }
}
