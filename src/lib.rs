//! # sweetshop-client
//!
//! Leptos + WASM browser client for the Sweet Shop inventory API:
//! registration and login, a customer dashboard for browsing, searching,
//! and purchasing sweets, and an admin panel for inventory CRUD and
//! restocking.
//!
//! Every page follows the same synchronization pattern: fetch the list on
//! mount, validate writes client-side, and re-fetch the full list after
//! each mutation. The remote API stays the single source of truth; this
//! crate never patches stock counts locally.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;

/// Hydration entry point for the WASM client.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
