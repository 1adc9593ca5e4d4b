//! Session Errors

use salvo::http::StatusError;
use tracing::error;

use tailor_app::domain::access::AccessError;

pub(crate) fn into_status_error(error: AccessError) -> StatusError {
    match error {
        AccessError::InvalidLicense => StatusError::forbidden().brief("Invalid license"),
        AccessError::InvalidAdminSecret => {
            StatusError::forbidden().brief("Invalid admin password")
        }
        AccessError::Licenses(source) => {
            error!("license store error during login: {source}");

            StatusError::internal_server_error()
        }
    }
}
