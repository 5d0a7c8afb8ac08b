//! # portal-client
//!
//! Leptos + WASM frontend for the data-integration portal: sign-in with
//! optional TOTP, account self-service, CSV uploads, and the administrator
//! screens for users, projects, and log monitoring.
//!
//! The crate is compiled twice. With `ssr` it is linked into the host binary
//! for server rendering; with `hydrate` it becomes the browser bundle, and
//! only then does it talk to the REST backend or `localStorage`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
