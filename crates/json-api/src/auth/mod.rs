//! Route gating

pub(crate) mod middleware;
