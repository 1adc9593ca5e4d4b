//! Get Customer Handler

use std::{collections::BTreeMap, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use tailor_app::domain::customers::records::{CustomerRecord, CustomerUuid};

use crate::{customers::errors::into_status_error, extensions::*, state::State};

/// Customer Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerResponse {
    /// The unique identifier of the customer record
    pub uuid: Uuid,

    /// License key of the shop that created the record
    pub owner: String,

    pub name: String,
    pub phone: String,

    /// Measurement values keyed by field name
    pub measurements: BTreeMap<String, Value>,

    /// The date and time the record was created
    pub created_at: String,
}

impl From<CustomerRecord> for CustomerResponse {
    fn from(customer: CustomerRecord) -> Self {
        Self {
            uuid: customer.uuid.into_uuid(),
            owner: customer.owner.into(),
            name: customer.name,
            phone: customer.phone,
            measurements: customer
                .measurements
                .into_iter()
                .map(|(name, value)| (name, value.into()))
                .collect(),
            created_at: customer.created_at.to_string(),
        }
    }
}

/// Get Customer Handler
///
/// Returns a single customer record visible to the current shop.
#[endpoint(
    tags("customers"),
    summary = "Get Customer",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Customer record"),
        (status_code = StatusCode::SEE_OTHER, description = "Not logged in"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
    ),
)]
pub(crate) async fn handler(
    customer: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CustomerResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_license_or_401()?;

    let customer = state
        .app
        .customers
        .get_customer(tenant, CustomerUuid::from_uuid(customer.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(customer.into()))
}
