//! Side navigation: brand logo followed by the navigation link list.
//!
//! ARCHITECTURE
//! ============
//! Purely declarative. Link data and brand text come from `dictionary`; the
//! theme toggle is the only interactive control and owns no local state.

#[cfg(test)]
#[path = "side_navigation_test.rs"]
mod side_navigation_test;

use leptos::prelude::*;

use crate::components::side_navigation_links::SideNavigationLinks;
use crate::components::text_logo::TextLogo;
use crate::components::theme_toggle::ThemeToggle;
use crate::dictionary::LOGO_TEXT;

#[component]
pub fn SideNavigation() -> impl IntoView {
    view! {
        <aside class="side-navigation">
            <TextLogo class="side-navigation__logo">{LOGO_TEXT}</TextLogo>
            <SideNavigationLinks/>
            <div class="side-navigation__spacer"></div>
            <ThemeToggle/>
        </aside>
    }
}
