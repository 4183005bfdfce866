//! # rentalindo-web
//!
//! WASM interactivity layer for the Enam Satu Rentalindo marketing site.
//! Attaches to server-rendered HTML and drives theme switching, the booking
//! modal and its WhatsApp hand-off, mobile navigation, scroll-spy, and the
//! homepage car filter.
//!
//! The controller (`controller`) and the view-state rules (`state`) are plain
//! Rust and fully testable natively. Everything that touches `web-sys` lives in
//! `dom` and is compiled only with the `hydrate` feature.

pub mod config;
pub mod controller;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod dom;

/// WASM entry point: install the panic hook and start the page session once
/// the document is ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    dom::session::start_when_ready();
}

/// Tear down the running page session, removing every listener and
/// cancelling a pending scroll evaluation.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn teardown() {
    dom::session::teardown();
}
