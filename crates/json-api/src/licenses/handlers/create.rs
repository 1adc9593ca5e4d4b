//! Issue License Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tailor_app::domain::licenses::{data::NewLicense, records::LicenseKey};

use crate::{
    extensions::*,
    licenses::{
        errors::{into_status_error, parse_license_key},
        get::LicenseResponse,
    },
    state::State,
};

/// Issue License Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct IssueLicenseRequest {
    /// License key; generated when omitted. An existing key is replaced.
    #[serde(default)]
    pub license: Option<String>,

    pub owner_name: String,
}

/// Issue License Handler
///
/// Inserts or replaces a license. The result is active with no login
/// history.
#[endpoint(
    tags("licenses"),
    summary = "Issue License",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "License issued"),
        (status_code = StatusCode::SEE_OTHER, description = "Not logged in as admin"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<IssueLicenseRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<LicenseResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let key = match request.license {
        Some(raw) => parse_license_key(raw)?,
        None => LicenseKey::generate(),
    };

    let owner_name = request.owner_name.trim().to_string();

    if owner_name.is_empty() {
        return Err(StatusError::bad_request().brief("Owner name is required"));
    }

    let license = state
        .app
        .licenses
        .issue(NewLicense { key, owner_name })
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/admin/licenses/{}", license.key), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(license.into()))
}
