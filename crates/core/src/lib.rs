//! `tenantcrm-core` — identifiers shared by the server and the client.
//!
//! This crate has no HTTP, session or UI concerns.

pub mod id;

pub use id::{CompanyId, IdError, SessionId, TenantId, UserId};
