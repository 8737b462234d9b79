//! Login view controller: theme access plus the authenticate action.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginPage` builds one controller on mount through `use_login`. The
//! controller owns the view's `LoginState` signal; the theme handle and the
//! authenticator are injected from context by `App`.
//!
//! CONCURRENCY
//! ===========
//! Clicks are not serialized. Each call to `on_login_click` runs to completion
//! on its own and writes its result when it resolves, so overlapping calls end
//! with whichever resolved last. Calls cannot be cancelled.

#[cfg(test)]
#[path = "login_controller_test.rs"]
mod login_controller_test;

use leptos::prelude::*;

use crate::net::auth::{AuthError, SharedAuthenticator};
use crate::net::types::{Authentication, Credentials};
use crate::state::login::{LoginState, LoginStatus};
use crate::state::theme::Theme;

/// Mediates between a login view and the authentication capability.
#[derive(Clone)]
pub struct LoginController {
    state: RwSignal<LoginState>,
    theme: RwSignal<Theme>,
    authenticator: SharedAuthenticator,
}

impl LoginController {
    /// Create a controller with fresh `Idle` state.
    pub fn new(theme: RwSignal<Theme>, authenticator: SharedAuthenticator) -> Self {
        Self { state: RwSignal::new(LoginState::default()), theme, authenticator }
    }

    /// Current theme, read from the injected handle at call time.
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn theme_name(&self) -> String {
        self.theme().as_str().to_owned()
    }

    /// Latest successful authentication, if any.
    pub fn authentication(&self) -> Option<Authentication> {
        self.state.with(|s| s.authentication.clone())
    }

    pub fn status(&self) -> LoginStatus {
        self.state.with(|s| s.status.clone())
    }

    pub fn is_busy(&self) -> bool {
        self.state.with(LoginState::is_busy)
    }

    pub fn state(&self) -> LoginState {
        self.state.get()
    }

    /// Read-only handle for reactive view bindings.
    pub fn state_signal(&self) -> ReadSignal<LoginState> {
        self.state.read_only()
    }

    /// Authenticate `credentials` and store the result.
    ///
    /// Marks the state pending, awaits the authenticator, then applies exactly
    /// one update with the outcome. A success overwrites `authentication`; a
    /// failure leaves it untouched and is recorded as `LoginStatus::Failed`.
    ///
    /// # Errors
    ///
    /// Returns the authenticator's error unchanged.
    pub async fn on_login_click(&self, credentials: Credentials) -> Result<Authentication, AuthError> {
        log::debug!("login attempt for {:?}", credentials.email);
        self.write(LoginState::begin);

        let result = self.authenticator.authenticate(&credentials).await;
        match &result {
            Ok(_) => log::debug!("login succeeded for {:?}", credentials.email),
            Err(e) => log::warn!("login failed: {e}"),
        }

        let outcome = result.clone();
        if !self.write(move |s| s.resolve(outcome)) {
            log::debug!("login view dropped before authentication resolved");
        }
        result
    }

    /// Apply `change` as a single signal update and bump `revision`.
    ///
    /// Returns `false` when the view has been disposed.
    fn write(&self, change: impl FnOnce(&mut LoginState)) -> bool {
        self.state
            .try_update(|s| {
                change(s);
                s.revision = s.revision.saturating_add(1);
            })
            .is_some()
    }
}

/// Build a `LoginController` from the context provided by `App`.
///
/// Expects `RwSignal<Theme>` and `SharedAuthenticator` in context.
pub fn use_login() -> LoginController {
    let theme = expect_context::<RwSignal<Theme>>();
    let authenticator = expect_context::<SharedAuthenticator>();
    LoginController::new(theme, authenticator)
}
