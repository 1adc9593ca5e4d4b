//! Access gate middleware.
//!
//! Each gated router declares the role it requires. The principal is read
//! from the session and authorized on every request.

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};
use tracing::{debug, error};

use tailor_app::domain::access::principal::{Decision, LoginTarget, Principal, Role};

use crate::{extensions::*, state::State};

/// Gate for routes that need a licensed tenant.
#[salvo::handler]
pub(crate) async fn require_tenant(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    gate(Role::Tenant, req, depot, res, ctrl).await;
}

/// Gate for admin routes.
#[salvo::handler]
pub(crate) async fn require_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    gate(Role::Admin, req, depot, res, ctrl).await;
}

async fn gate(
    role: Role,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let access = match depot.obtain::<Arc<State>>() {
        Ok(state) => Arc::clone(&state.app.access),
        Err(_error) => {
            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    let principal = depot.principal();

    match access.authorize(&principal, role).await {
        Ok(Decision::Allowed) => {
            if let Principal::Tenant { license } = principal {
                depot.insert_tenant_license(license);
            }

            ctrl.call_next(req, depot, res).await;
        }
        Ok(Decision::Redirect(target)) => {
            if role == Role::Tenant && matches!(principal, Principal::Tenant { .. }) {
                debug!("clearing stale tenant session");

                depot.clear_principal();
            }

            redirect_to_login(res, target);
            ctrl.skip_rest();
        }
        Err(source) => {
            error!("failed to authorize request: {source}");

            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();
        }
    }
}

/// Answer with `303 See Other` pointing at a login page.
pub(crate) fn redirect_to_login(res: &mut Response, target: LoginTarget) {
    if let Err(source) = res.add_header(LOCATION, target.path(), true) {
        error!("failed to set location header: {source}");

        res.render(StatusError::internal_server_error());

        return;
    }

    res.status_code(StatusCode::SEE_OTHER);
}
