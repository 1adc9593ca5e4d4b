//! Toggle License Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    licenses::{
        errors::{into_status_error, parse_license_key},
        get::LicenseResponse,
    },
    state::State,
};

/// Toggle License Handler
///
/// Flips a license between active and inactive.
#[endpoint(
    tags("licenses"),
    summary = "Toggle License",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Updated license"),
        (status_code = StatusCode::SEE_OTHER, description = "Not logged in as admin"),
        (status_code = StatusCode::NOT_FOUND, description = "License not found"),
    ),
)]
pub(crate) async fn handler(
    license: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<LicenseResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let key = parse_license_key(license.into_inner())?;

    let license = state
        .app
        .licenses
        .toggle(&key)
        .await
        .map_err(into_status_error)?;

    Ok(Json(license.into()))
}
