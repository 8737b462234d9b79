//! Login page with an email + password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendering only. Request state and the authenticate action live in
//! `LoginController`, created once per mount by `use_login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::text_logo::TextLogo;
use crate::dictionary::{
    LOGIN_BUTTON, LOGIN_EMAIL_PLACEHOLDER, LOGIN_PASSWORD_PLACEHOLDER, LOGIN_PENDING, LOGIN_SUCCEEDED, LOGIN_TITLE,
    LOGO_TEXT,
};
use crate::net::types::{Authentication, Credentials};
use crate::pages::login_controller::use_login;
use crate::state::login::LoginStatus;

/// Build credentials from raw form values. The email is trimmed; the password
/// is passed through as typed.
pub fn credentials_from_form(email: &str, password: &str) -> Credentials {
    Credentials::new(email.trim(), password)
}

/// User-facing message for the current request status.
pub fn status_message(status: &LoginStatus) -> Option<String> {
    match status {
        LoginStatus::Idle => None,
        LoginStatus::Pending => Some(LOGIN_PENDING.to_owned()),
        LoginStatus::Succeeded(_) => Some(LOGIN_SUCCEEDED.to_owned()),
        LoginStatus::Failed(e) => Some(format!("Login failed: {e}")),
    }
}

/// Compact JSON rendering of the authentication payload.
pub fn session_summary(authentication: &Authentication) -> String {
    authentication.as_value().to_string()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let controller = use_login();
    let state = controller.state_signal();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let page_class = {
        let controller = controller.clone();
        move || format!("login-page login-page--{}", controller.theme_name())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = credentials_from_form(&email.get(), &password.get());

        #[cfg(feature = "hydrate")]
        {
            let controller = controller.clone();
            leptos::task::spawn_local(async move {
                // Failure is already recorded in the login state and logged.
                let _ = controller.on_login_click(credentials).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
        }
    };

    let message = move || state.with(|s| status_message(&s.status));
    let is_error = move || state.with(|s| s.error().is_some());
    let summary = move || state.with(|s| s.authentication.as_ref().map(session_summary));

    view! {
        <div class=page_class>
            <div class="login-card">
                <TextLogo class="login-card__logo">{LOGO_TEXT}</TextLogo>
                <p class="login-card__subtitle">{LOGIN_TITLE}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder=LOGIN_EMAIL_PLACEHOLDER
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder=LOGIN_PASSWORD_PLACEHOLDER
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || state.with(|s| s.is_busy())>
                        {LOGIN_BUTTON}
                    </button>
                </form>
                <Show when=move || message().is_some()>
                    <p class="login-message" class:login-message--error=is_error>
                        {move || message().unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || summary().is_some()>
                    <pre class="login-session">{move || summary().unwrap_or_default()}</pre>
                </Show>
            </div>
        </div>
    }
}
