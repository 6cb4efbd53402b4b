//! PulseSync Auth - login and signup pages
//!
//! Leptos frontend that authenticates against the PulseSync auth API and
//! hands the user off to the patient or hospital app, built with Leptos and
//! WebAssembly.

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
