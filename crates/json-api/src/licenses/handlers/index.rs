//! License Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    licenses::{errors::into_status_error, get::LicenseResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LicensesResponse {
    /// Every issued license, ordered by key
    pub licenses: Vec<LicenseResponse>,
}

/// License Index Handler
#[endpoint(
    tags("licenses"),
    summary = "List Licenses",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Licenses"),
        (status_code = StatusCode::SEE_OTHER, description = "Not logged in as admin"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<LicensesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let licenses = state
        .app
        .licenses
        .list()
        .await
        .map_err(into_status_error)?;

    Ok(Json(LicensesResponse {
        licenses: licenses.into_iter().map(Into::into).collect(),
    }))
}
