//! View-state modules shared by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `theme` is app-wide and injected through context; `login` is owned by a
//! single login view and dropped with it.

pub mod login;
pub mod theme;
