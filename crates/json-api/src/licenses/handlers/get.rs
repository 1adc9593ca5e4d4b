//! Get License Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tailor_app::domain::licenses::records::LicenseRecord;

use crate::{
    extensions::*,
    licenses::errors::{into_status_error, parse_license_key},
    state::State,
};

/// License Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LicenseResponse {
    /// The license key
    pub license: String,

    pub owner_name: String,

    /// `active` or `inactive`
    pub status: String,

    /// The date and time the license was issued
    pub issued_at: String,

    /// The date and time of the last successful login
    pub last_login_at: Option<String>,

    /// Client address of the last successful login
    pub last_login_ip: Option<String>,
}

impl From<LicenseRecord> for LicenseResponse {
    fn from(license: LicenseRecord) -> Self {
        Self {
            license: license.key.into(),
            owner_name: license.owner_name,
            status: license.status.as_str().to_string(),
            issued_at: license.issued_at.to_string(),
            last_login_at: license.last_login_at.as_ref().map(ToString::to_string),
            last_login_ip: license.last_login_ip,
        }
    }
}

/// Get License Handler
#[endpoint(
    tags("licenses"),
    summary = "Get License",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::OK, description = "License"),
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
        .get(&key)
        .await
        .map_err(into_status_error)?;

    Ok(Json(license.into()))
}
