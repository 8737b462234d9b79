//! Client configuration resolved at build time.
//!
//! DESIGN
//! ======
//! The WASM bundle has no process environment, so values are baked in with
//! `option_env!` when the crate is compiled. Blank or missing values fall back
//! to defaults that match the local development server.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_AUTH_ENDPOINT: &str = "/api/auth/login";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "portal_ui_theme";

/// Typed client configuration, provided to the component tree via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// URL the HTTP authenticator posts credentials to.
    pub auth_endpoint: String,
    /// `localStorage` key holding the persisted theme name.
    pub theme_storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_endpoint: DEFAULT_AUTH_ENDPOINT.to_owned(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `PORTAL_AUTH_ENDPOINT`: default `/api/auth/login`
    /// - `PORTAL_THEME_STORAGE_KEY`: default `portal_ui_theme`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PORTAL_AUTH_ENDPOINT"), option_env!("PORTAL_THEME_STORAGE_KEY"))
    }

    /// Build config from raw optional values, applying defaults.
    #[must_use]
    pub fn from_values(auth_endpoint: Option<&str>, theme_storage_key: Option<&str>) -> Self {
        Self {
            auth_endpoint: strip_trailing_slash(resolve(auth_endpoint, DEFAULT_AUTH_ENDPOINT)).to_owned(),
            theme_storage_key: resolve(theme_storage_key, DEFAULT_THEME_STORAGE_KEY).to_owned(),
        }
    }
}

fn resolve<'a>(raw: Option<&'a str>, default: &'a str) -> &'a str {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => default,
    }
}

/// Drop one trailing `/`, keeping a bare `/` as given.
fn strip_trailing_slash(value: &str) -> &str {
    value.strip_suffix('/').filter(|s| !s.is_empty()).unwrap_or(value)
}
