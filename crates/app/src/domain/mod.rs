//! Tailor Shop Domain Concerns

pub mod access;
pub mod customers;
pub mod licenses;
