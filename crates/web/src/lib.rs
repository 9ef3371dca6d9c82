//! `tenantcrm-web`
//!
//! Client-side half of access control. The gate decision itself is plain
//! Rust (and tested natively); the Leptos components that render it only
//! build for `wasm32`.

pub mod entitlements;
pub mod guard;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use entitlements::{Entitlements, is_truthy};
pub use guard::{DEFAULT_FALLBACK, FeatureGate, GateOutcome};
