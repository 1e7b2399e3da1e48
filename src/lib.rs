//! Landing Enhancer - interactive marketing landing page
//!
//! Server-rendered with Leptos and hydrated in the browser, adding
//! auto-playing sliders, smooth in-page navigation, scroll-driven styling,
//! a WhatsApp lead form and behavioral analytics.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
