//! Admin Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, sessions::errors::into_status_error, state::State};

/// Admin Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminLoginRequest {
    pub password: String,
}

/// Admin Login Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminLoginResponse {
    pub admin: bool,
}

/// Admin Login Handler
#[endpoint(
    tags("sessions"),
    summary = "Admin Login",
    responses(
        (status_code = StatusCode::OK, description = "Logged in as admin"),
        (status_code = StatusCode::FORBIDDEN, description = "Invalid admin password"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AdminLoginRequest>,
    depot: &mut Depot,
) -> Result<Json<AdminLoginResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let principal = state
        .app
        .access
        .login_admin(&json.into_inner().password)
        .await
        .map_err(into_status_error)?;

    depot.set_principal(&principal)?;

    Ok(Json(AdminLoginResponse { admin: true }))
}
