//! HTTP API: session loading, request context, permission gating and routes.

pub mod app;
pub mod authz;
pub mod config;
pub mod context;
pub mod middleware;
pub mod session;
