//! Customer Data

use std::str::FromStr;

use thiserror::Error;

use crate::domain::customers::measurements::SubmittedMeasurements;

/// New Customer Data
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    /// Submitted values; the service keeps the configured, non-empty ones.
    pub measurements: SubmittedMeasurements,
}

/// How customer records are shared between licenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Partitioning {
    /// Each license only sees the records it created.
    #[default]
    PerTenant,

    /// Every license sees every record (single-shop installs).
    Shared,
}

#[derive(Debug, Error)]
#[error("unknown record partitioning `{0}`, expected `per-tenant` or `shared`")]
pub struct UnknownPartitioning(String);

impl FromStr for Partitioning {
    type Err = UnknownPartitioning;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "per-tenant" | "per_tenant" | "tenant" => Ok(Self::PerTenant),
            "shared" => Ok(Self::Shared),
            _ => Err(UnknownPartitioning(value.to_string())),
        }
    }
}

/// Case-insensitive substring filter over customer name and phone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Build a query from raw input. Blank input means "no filter".
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();

        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `LIKE` pattern matching the query anywhere, with wildcards escaped by `\`.
    #[must_use]
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);

        pattern.push('%');

        for ch in self.0.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }

            pattern.push(ch);
        }

        pattern.push('%');

        pattern
    }
}
