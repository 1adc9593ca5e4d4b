//! License Errors

use salvo::http::StatusError;
use tracing::error;

use tailor_app::domain::licenses::{LicensesServiceError, records::LicenseKey};

use crate::extensions::*;

pub(crate) fn into_status_error(error: LicensesServiceError) -> StatusError {
    match error {
        LicensesServiceError::NotFound => StatusError::not_found().brief("License not found"),
        LicensesServiceError::AlreadyExists => {
            StatusError::conflict().brief("License already exists")
        }
        LicensesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid license payload")
        }
        LicensesServiceError::Sql(source) => {
            error!("license store error: {source}");

            StatusError::internal_server_error()
        }
    }
}

/// Parse a license key taken from a request.
pub(crate) fn parse_license_key(raw: String) -> Result<LicenseKey, StatusError> {
    LicenseKey::new(raw).or_400("Invalid license key")
}
