//! Credential and authentication-result DTOs for the auth boundary.
//!
//! DESIGN
//! ======
//! `Authentication` is owned by the external service, so it is kept as a
//! transparent JSON value. The UI stores and forwards it without inspecting
//! its shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Email/password pair submitted for authentication.
///
/// No validation happens here; either field may be empty. `Debug` output
/// redacts the password.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque result of a credential-verification attempt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Authentication(serde_json::Value);

impl Authentication {
    /// Borrow the raw payload returned by the service.
    #[must_use]
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consume the wrapper and return the raw payload.
    #[must_use]
    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for Authentication {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}
