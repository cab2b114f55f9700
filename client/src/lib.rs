//! # laptrack-client
//!
//! Leptos + WASM frontend for the racing lap-time tracker. Talks to the
//! backend JSON API through a `Transport` seam and keeps the signed-in
//! session in memory only.
//!
//! The `ClientController` holds every backend operation; pages and components
//! own form state in signals and render from shared state contexts.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic and log hooks, then hydrates the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
