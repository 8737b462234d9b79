//! Landing page: side navigation beside the main content area.

use leptos::prelude::*;

use crate::components::side_navigation::SideNavigation;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="app-layout">
            <SideNavigation/>
            <main class="app-layout__content">
                <h2>"Welcome"</h2>
                <p>"Pick a destination from the navigation."</p>
            </main>
        </div>
    }
}
