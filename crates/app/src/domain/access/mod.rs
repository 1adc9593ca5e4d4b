//! Access
//!
//! Resolves who a request acts as and whether that principal may reach a
//! route. Tenants authenticate with a license key, admins with the shared
//! admin secret.

pub mod errors;
pub mod principal;
pub mod secret;
pub mod service;

pub use errors::AccessError;
pub use service::*;
