//! Customer Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tailor_app::domain::customers::data::SearchQuery;

use crate::{
    customers::{errors::into_status_error, get::CustomerResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomersResponse {
    /// The matching customer records
    pub customers: Vec<CustomerResponse>,
}

/// Customer Index Handler
///
/// Lists the shop's customers, newest first. With `q`, returns records whose
/// name or phone contains the query, ignoring case.
#[endpoint(
    tags("customers"),
    summary = "List Customers",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Customer records"),
        (status_code = StatusCode::SEE_OTHER, description = "Not logged in"),
    ),
)]
pub(crate) async fn handler(
    q: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<CustomersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_license_or_401()?;
    let search = q.into_inner().as_deref().and_then(SearchQuery::parse);

    let customers = state
        .app
        .customers
        .list_customers(tenant, search)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CustomersResponse {
        customers: customers.into_iter().map(Into::into).collect(),
    }))
}
