//! Licenses
//!
//! The license authority: a license key is the only tenant identity, and a
//! key grants access only while its status is active.

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::LicensesServiceError;
pub use service::*;
