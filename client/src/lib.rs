//! Browser app for upwatch — marketing pages, auth flows, and the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled twice: with the `ssr` feature the server renders every page to
//! HTML, with the `hydrate` feature the same tree boots as WASM in the
//! browser and takes over interactivity. Session state is synchronized by
//! the `session` module; everything else is presentation.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
