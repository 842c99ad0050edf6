//! # client
//!
//! Leptos + WASM single-page portfolio: biography, education, skills,
//! projects, and contact links, with a cursor glow, a collapsible mobile
//! menu, and once-only scroll-reveal entrances.
//!
//! The interactive state (`state`) and the browser seams (`util`) are plain
//! Rust and run natively under `cargo test`; the `csr` feature wires them to
//! the window and builds the WASM bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_helpers;

/// WASM entry point: install browser logging and mount the root view on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // A logger may already be installed when the module is re-initialised.
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(app::App);
}
