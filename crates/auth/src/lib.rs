//! `tenantcrm-auth` — session normalization and permission gating.
//!
//! This crate is intentionally decoupled from HTTP and storage: the API layer
//! hands it a [`Session`] and gets back a [`RequestContext`] or an
//! authorization decision.

pub mod authorize;
pub mod context;
pub mod permissions;
pub mod roles;
pub mod session;

pub use authorize::{AuthzError, PermissionGate};
pub use context::RequestContext;
pub use permissions::{Permission, PermissionSet};
pub use roles::Role;
pub use session::Session;
