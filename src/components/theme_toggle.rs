//! Button flipping the app-wide theme handle.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::theme::Theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let config = expect_context::<ClientConfig>();

    let on_click = move |_ev: leptos::ev::MouseEvent| {
        let next = crate::util::theme::toggle(theme.get_untracked(), &config.theme_storage_key);
        theme.set(next);
    };

    view! {
        <button class="btn theme-toggle" on:click=on_click title="Toggle theme">
            {move || if theme.get() == Theme::Dark { "☀" } else { "☾" }}
        </button>
    }
}
