//! Navigation link list for the side navigation.

#[cfg(test)]
#[path = "side_navigation_links_test.rs"]
mod side_navigation_links_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::dictionary::{NAV_LINKS, NavLink};

/// Whether `href` should be highlighted for the current `pathname`.
///
/// The root link matches only `/`; other links also match nested paths.
pub fn is_active_link(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname == href
        || pathname
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Router links for every entry in `NAV_LINKS`.
#[component]
pub fn SideNavigationLinks() -> impl IntoView {
    let pathname = use_location().pathname;

    let render_link = move |link: NavLink| {
        let is_active = move || is_active_link(&pathname.get(), link.href);
        view! {
            <li
                class="side-navigation__item"
                class:side-navigation__item--active=is_active
            >
                <A href=link.href>{link.label}</A>
            </li>
        }
    };

    view! {
        <nav class="side-navigation__links">
            <ul>{NAV_LINKS.iter().copied().map(render_link).collect::<Vec<_>>()}</ul>
        </nav>
    }
}
