//! # campus-market
//!
//! Leptos + WASM frontend chrome for the campus marketplace.
//!
//! This crate contains the bottom navigation bar, the chip selector control,
//! the session/auth-change client they consume, and a thin application shell
//! that mounts them behind the router.

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
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
