//! Tenant Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tailor_app::domain::{access::AccessError, licenses::records::LicenseKey};

use crate::{
    extensions::*, observability::observe_tenant_login, sessions::errors::into_status_error,
    state::State,
};

/// Tenant Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    /// The shop's license key
    pub license: String,
}

/// Tenant Login Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    pub license: String,
    pub owner_name: String,
}

/// Tenant Login Handler
///
/// Activates a session for an active license and records the login time
/// and client address.
#[endpoint(
    tags("sessions"),
    summary = "Tenant Login",
    responses(
        (status_code = StatusCode::OK, description = "Logged in"),
        (status_code = StatusCode::FORBIDDEN, description = "Invalid license"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let client_ip = client_ip(req);

    let login = match LicenseKey::new(json.into_inner().license) {
        Ok(key) => state.app.access.login_tenant(&key, &client_ip).await,
        Err(_blank) => Err(AccessError::InvalidLicense),
    };

    observe_tenant_login(login.is_ok());

    let login = login.map_err(into_status_error)?;

    depot.set_principal(&login.principal)?;

    Ok(Json(LoginResponse {
        license: login.license.key.into(),
        owner_name: login.license.owner_name,
    }))
}

/// The peer address of the request, without its port.
fn client_ip(req: &Request) -> String {
    let addr = req.remote_addr();

    if let Some(v4) = addr.as_ipv4() {
        return v4.ip().to_string();
    }

    if let Some(v6) = addr.as_ipv6() {
        return v6.ip().to_string();
    }

    addr.to_string()
}
