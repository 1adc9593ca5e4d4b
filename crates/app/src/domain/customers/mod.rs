//! Customers
//!
//! Measurement records created by a licensed shop. Records are immutable
//! once written: they can be created, listed, searched and fetched.

pub mod data;
pub mod errors;
pub mod measurements;
pub mod records;
mod repository;
pub mod service;

pub use errors::CustomersServiceError;
pub use service::*;
