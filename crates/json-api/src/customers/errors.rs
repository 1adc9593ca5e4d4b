//! Customer Errors

use salvo::http::StatusError;
use tracing::error;

use tailor_app::domain::customers::CustomersServiceError;

pub(crate) fn into_status_error(error: CustomersServiceError) -> StatusError {
    match error {
        CustomersServiceError::NotFound => StatusError::not_found().brief("Customer not found"),
        CustomersServiceError::AlreadyExists => {
            StatusError::conflict().brief("Customer already exists")
        }
        CustomersServiceError::MissingRequiredData | CustomersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid customer payload")
        }
        CustomersServiceError::Encoding(source) => {
            error!("failed to encode customer measurements: {source}");

            StatusError::internal_server_error()
        }
        CustomersServiceError::Sql(source) => {
            error!("customer store error: {source}");

            StatusError::internal_server_error()
        }
    }
}
