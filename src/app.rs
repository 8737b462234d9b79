//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::auth::{HttpAuthenticator, SharedAuthenticator};
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::theme::Theme;

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
/// Provides config, the theme handle, and the authenticator to the tree and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let theme = RwSignal::new(Theme::default());
    let authenticator: SharedAuthenticator = Arc::new(HttpAuthenticator::new(config.auth_endpoint.clone()));

    provide_context(config.clone());
    provide_context(theme);
    provide_context(authenticator);

    // Restore the stored theme once the page is live in the browser.
    let storage_key = config.theme_storage_key;
    Effect::new(move || {
        let preferred = crate::util::theme::read_preference(&storage_key);
        crate::util::theme::apply(preferred);
        theme.set(preferred);
    });

    view! {
        <Title text="Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
