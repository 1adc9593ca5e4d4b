//! Delete License Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    licenses::errors::{into_status_error, parse_license_key},
    state::State,
};

/// Delete License Handler
///
/// Removes a license permanently. Customer records created under it are
/// kept.
#[endpoint(
    tags("licenses"),
    summary = "Delete License",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "License deleted"),
        (status_code = StatusCode::SEE_OTHER, description = "Not logged in as admin"),
        (status_code = StatusCode::NOT_FOUND, description = "License not found"),
    ),
)]
pub(crate) async fn handler(
    license: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let key = parse_license_key(license.into_inner())?;

    state
        .app
        .licenses
        .delete(&key)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
