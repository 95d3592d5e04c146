//! # client
//!
//! Leptos + WASM front end for TruthLens. Collects a message or a file,
//! sends it to the remote analysis API with a client-side deadline, and
//! renders the returned risk score, findings, mood, and reasons.
//!
//! This crate contains pages, components, application state, network types,
//! and the analysis call. The same code renders on the server (`ssr`) and
//! hydrates in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
