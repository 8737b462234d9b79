//! # portal-ui
//!
//! Leptos + WASM frontend for the portal login screen and its navigation
//! chrome.
//!
//! This crate contains pages, components, view state, the authentication
//! boundary, and browser utilities. Server-side rendering is enabled by the
//! `ssr` feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod dictionary;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
