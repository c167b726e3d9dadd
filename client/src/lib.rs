//! # client
//!
//! Leptos + WASM frontend for the Desert Cool Air marketing site.
//!
//! This crate contains the pages, layout chrome, the lead-capture form, SEO
//! head management, and the hydration entry point. The same components render
//! on the server (`ssr`) and hydrate in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and the panic hook, then hydrate `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(app::App);
}
