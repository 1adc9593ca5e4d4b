//! Licenses service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// License service error variants.
#[derive(Debug, Error)]
pub enum LicensesServiceError {
    /// License key does not exist, or is not active where an active key is required.
    #[error("license not found")]
    NotFound,

    /// License key already exists.
    #[error("license already exists")]
    AlreadyExists,

    /// Stored or provided data failed a constraint.
    #[error("invalid license data")]
    InvalidData,

    /// Underlying SQL/storage error.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for LicensesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::ForeignKeyViolation | ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
