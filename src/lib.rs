//! # ivp-client
//!
//! Leptos + WASM front end for the Immigration Verification Platform.
//! Three upload tools (document verifier, hiring extractor, resume converter)
//! post files to the backend API and render the JSON or binary response,
//! alongside a floating status widget that polls the liveness endpoint.
//!
//! This crate contains pages, components, application state, and the
//! gloo-net HTTP layer. Browser-only code is gated behind the `hydrate`
//! feature so the state and parsing modules stay natively testable.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: initialize logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
