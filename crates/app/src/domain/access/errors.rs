//! Access errors.

use thiserror::Error;

use crate::domain::licenses::LicensesServiceError;

#[derive(Debug, Error)]
pub enum AccessError {
    /// The key does not exist or is not active.
    #[error("Invalid license")]
    InvalidLicense,

    #[error("Invalid admin password")]
    InvalidAdminSecret,

    #[error(transparent)]
    Licenses(#[from] LicensesServiceError),
}
