//! Brand heading rendered in the logo typeface.

#[cfg(test)]
#[path = "text_logo_test.rs"]
mod text_logo_test;

use leptos::prelude::*;

const TEXT_LOGO_CLASS: &str = "text-logo";
const LOGO_FONT_CLASS: &str = "font-pacifico";

/// Compose the heading class list, appending `extra` only when non-blank.
pub fn text_logo_class(extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        format!("{TEXT_LOGO_CLASS} {LOGO_FONT_CLASS}")
    } else {
        format!("{TEXT_LOGO_CLASS} {LOGO_FONT_CLASS} {extra}")
    }
}

/// `<h1>` logo text. `class` adds caller-specific tokens.
#[component]
pub fn TextLogo(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <h1 class=text_logo_class(&class)>{children()}</h1> }
}
