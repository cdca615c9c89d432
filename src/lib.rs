//! # civic-portal
//!
//! Leptos + WASM client core for the citizen-government services portal.
//!
//! This crate owns the session layer of the frontend: the persisted session
//! store, the auth and locale coordinators, role-based route guarding, and the
//! app shell that mounts them in a fixed order. Pages beyond dashboards and
//! settings live elsewhere and consume the `PortalContext` this crate provides.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
