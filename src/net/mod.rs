//! Networking modules for the authentication boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` defines the `Authenticator` capability and its browser HTTP adapter,
//! and `types` defines the credential/result schema exchanged with it.

pub mod auth;
pub mod types;
