//! Leptos frontend: entitlements provider, feature-gated routes and the app shell.

pub mod api;
pub mod app;
pub mod entitlements;
pub mod require_feature;

pub use entitlements::{EntitlementsContext, EntitlementsProvider};
pub use require_feature::RequireFeature;

use wasm_bindgen::prelude::*;

/// WASM entry point, called automatically when the module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    leptos::mount_to_body(app::App);
}
