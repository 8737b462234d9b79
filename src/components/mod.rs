//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render layout chrome and read shared state (theme, config)
//! from Leptos context providers.

pub mod side_navigation;
pub mod side_navigation_links;
pub mod text_logo;
pub mod theme_toggle;
