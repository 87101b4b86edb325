//! # client
//!
//! Leptos + WASM frontend for the Motion Gallery demo site.
//!
//! This crate holds the static route table, the lazy view cache, the
//! engine-independent `Navigator`, and the Leptos pages and components that
//! bind the same table to `leptos_router`. The `server` crate renders it over
//! SSR; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod util;
pub mod views;

/// WASM entry point: attach the client to the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug)
        .unwrap_or_else(|err| leptos::logging::warn!("console logger unavailable: {err}"));
    leptos::mount::hydrate_body(app::App);
}
