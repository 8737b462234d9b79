//! Static UI strings and navigation link definitions.

/// Brand text rendered by the side navigation logo.
pub const LOGO_TEXT: &str = "Portal";

pub const LOGIN_TITLE: &str = "Sign in";
pub const LOGIN_EMAIL_PLACEHOLDER: &str = "you@example.com";
pub const LOGIN_PASSWORD_PLACEHOLDER: &str = "Password";
pub const LOGIN_BUTTON: &str = "Log in";
pub const LOGIN_PENDING: &str = "Signing in...";
pub const LOGIN_SUCCEEDED: &str = "Signed in.";

/// A single entry in the side navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/login", label: "Sign in" },
];
