//! License-gated record keeping for tailor shops: the license authority,
//! access gate and customer measurement records over an embedded store.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

pub mod uuids;
