//! NeoKeys Store Frontend
//!
//! Leptos-based WASM frontend for the terminal-themed storefront.

mod api;
mod app;
mod bindings;
mod components;
mod pages;
mod stripe;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
