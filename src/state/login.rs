//! Transient state for one login view.
//!
//! DESIGN
//! ======
//! The request lifecycle is an explicit `LoginStatus` so loading and failure
//! are observable by the view. `authentication` is tracked separately: it only
//! changes on success, and every success overwrites it with the newest result.
//! Resolutions are applied in arrival order, so the last call to resolve wins.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::auth::AuthError;
use crate::net::types::Authentication;

/// Lifecycle of the most recent login request.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoginStatus {
    /// No request has been made yet.
    #[default]
    Idle,
    /// A request was started and has not resolved yet.
    Pending,
    /// The last request to resolve succeeded.
    Succeeded(Authentication),
    /// The last request to resolve failed.
    Failed(AuthError),
}

/// Login view state owned by a single `LoginController`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginState {
    /// Latest successful result; `None` until the first success.
    pub authentication: Option<Authentication>,
    pub status: LoginStatus,
    /// Number of requests started but not yet resolved.
    pub in_flight: u32,
    /// Bumped once per write by the owning controller.
    pub revision: u64,
}

impl LoginState {
    /// Record the start of a request.
    pub fn begin(&mut self) {
        self.in_flight = self.in_flight.saturating_add(1);
        self.status = LoginStatus::Pending;
    }

    /// Record the outcome of a request.
    pub fn resolve(&mut self, result: Result<Authentication, AuthError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(authentication) => {
                self.authentication = Some(authentication.clone());
                self.status = LoginStatus::Succeeded(authentication);
            }
            Err(error) => self.status = LoginStatus::Failed(error),
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Error of the last resolved request, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&AuthError> {
        match &self.status {
            LoginStatus::Failed(error) => Some(error),
            _ => None,
        }
    }
}
