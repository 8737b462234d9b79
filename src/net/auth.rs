//! Authentication capability consumed by the login flow.
//!
//! Client-side (hydrate): `HttpAuthenticator` posts credentials via `gloo-net`.
//! Server-side (SSR): the adapter returns `AuthError::Unavailable` since login
//! is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure the service can produce collapses into `AuthError`. The login
//! controller treats all variants alike; the variants only carry detail for
//! logging and display.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use super::types::{Authentication, Credentials};

/// Failure of an authentication call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request could not be built or sent.
    #[error("authentication request failed: {0}")]
    Request(String),

    /// The service answered with a non-success HTTP status.
    #[error("authentication rejected: status {status}")]
    Rejected { status: u16 },

    /// The response body was not valid JSON.
    #[error("authentication response parse failed: {0}")]
    Decode(String),

    /// No authentication backend is reachable from this environment.
    #[error("authentication not available on server")]
    Unavailable,
}

/// Asynchronous credential check provided by an external service.
///
/// Futures are not required to be `Send`: the browser runs them on a single
/// thread through `spawn_local`.
#[async_trait::async_trait(?Send)]
pub trait Authenticator: Send + Sync {
    /// Verify `credentials` and return the service's opaque result.
    async fn authenticate(&self, credentials: &Credentials) -> Result<Authentication, AuthError>;
}

/// Context handle used to inject the authenticator into the view tree.
pub type SharedAuthenticator = Arc<dyn Authenticator>;

/// Authenticator backed by a JSON `POST` to a configured endpoint.
#[derive(Clone, Debug)]
pub struct HttpAuthenticator {
    endpoint: String,
}

impl HttpAuthenticator {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl Authenticator for HttpAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Authentication, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(credentials)
                .map_err(|e| AuthError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(AuthError::Rejected { status: resp.status() });
            }
            resp.json::<Authentication>()
                .await
                .map_err(|e| AuthError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthError::Unavailable)
        }
    }
}
