//! Create Customer Handler

use std::{collections::BTreeMap, sync::Arc};

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use tailor_app::domain::customers::{data::NewCustomer, measurements::submitted_from_json};

use crate::{
    customers::{errors::into_status_error, get::CustomerResponse},
    extensions::*,
    state::State,
};

/// Create Customer Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCustomerRequest {
    pub name: String,
    pub phone: String,

    /// Measurement values keyed by field name: numbers, text or `null`.
    /// Unknown fields and empty values are dropped.
    #[serde(default)]
    pub measurements: BTreeMap<String, Value>,
}

impl TryFrom<CreateCustomerRequest> for NewCustomer {
    type Error = StatusError;

    fn try_from(request: CreateCustomerRequest) -> Result<Self, Self::Error> {
        let measurements = submitted_from_json(request.measurements)
            .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

        Ok(NewCustomer {
            name: request.name,
            phone: request.phone,
            measurements,
        })
    }
}

/// Create Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Create Customer",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Customer created"),
        (status_code = StatusCode::SEE_OTHER, description = "Not logged in"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCustomerRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CustomerResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_license_or_401()?;
    let customer = NewCustomer::try_from(json.into_inner())?;

    let customer = state
        .app
        .customers
        .create_customer(tenant, customer)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/customers/{}", customer.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(customer.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use tailor_app::domain::customers::{
        CustomersServiceError, MockCustomersService, measurements::MeasurementValue,
        records::CustomerUuid,
    };

    use crate::test_helpers::{customers_service, make_customer, test_license};

    use super::*;

    fn make_service(customers: MockCustomersService) -> Service {
        customers_service(customers, Router::with_path("customers").post(handler))
    }

    #[tokio::test]
    async fn test_create_customer_success() -> TestResult {
        let uuid = CustomerUuid::new();
        let customer = make_customer(uuid, "Zubair");

        let mut customers = MockCustomersService::new();

        customers
            .expect_create_customer()
            .once()
            .withf(|owner, new| {
                *owner == test_license()
                    && new.name == "Zubair"
                    && new.phone == "03001234567"
                    && new.measurements.get("chest") == Some(&Some(MeasurementValue::from("40")))
            })
            .return_once(move |_, _| Ok(customer));

        customers.expect_list_customers().never();
        customers.expect_get_customer().never();

        let mut res = TestClient::post("http://example.com/customers")
            .json(&json!({
                "name": "Zubair",
                "phone": "03001234567",
                "measurements": { "chest": "40" }
            }))
            .send(&make_service(customers))
            .await;

        let body: CustomerResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/customers/{uuid}").as_str()));
        assert_eq!(body.uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_accepts_numeric_and_null_measurements() -> TestResult {
        let uuid = CustomerUuid::new();
        let customer = make_customer(uuid, "Zubair");

        let mut customers = MockCustomersService::new();

        customers
            .expect_create_customer()
            .once()
            .withf(|_, new| {
                new.measurements.get("chest") == Some(&Some(MeasurementValue::from(40_i64)))
                    && new.measurements.get("waist") == Some(&None)
            })
            .return_once(move |_, _| Ok(customer));

        customers.expect_list_customers().never();
        customers.expect_get_customer().never();

        let res = TestClient::post("http://example.com/customers")
            .json(&json!({
                "name": "Zubair",
                "phone": "0300",
                "measurements": { "chest": 40, "waist": null }
            }))
            .send(&make_service(customers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_nested_measurement_returns_400() -> TestResult {
        let mut customers = MockCustomersService::new();

        customers.expect_create_customer().never();
        customers.expect_list_customers().never();
        customers.expect_get_customer().never();

        let res = TestClient::post("http://example.com/customers")
            .json(&json!({
                "name": "Zubair",
                "phone": "0300",
                "measurements": { "chest": [40, 42] }
            }))
            .send(&make_service(customers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_without_measurements_is_accepted() -> TestResult {
        let uuid = CustomerUuid::new();
        let customer = make_customer(uuid, "Ali");

        let mut customers = MockCustomersService::new();

        customers
            .expect_create_customer()
            .once()
            .withf(|_, new| new.measurements.is_empty())
            .return_once(move |_, _| Ok(customer));

        customers.expect_list_customers().never();
        customers.expect_get_customer().never();

        let res = TestClient::post("http://example.com/customers")
            .json(&json!({ "name": "Ali", "phone": "0300" }))
            .send(&make_service(customers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_malformed_body_returns_400() -> TestResult {
        let mut customers = MockCustomersService::new();

        customers.expect_create_customer().never();
        customers.expect_list_customers().never();
        customers.expect_get_customer().never();

        let res = TestClient::post("http://example.com/customers")
            .json(&json!({ "name": 42 }))
            .send(&make_service(customers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_store_error_returns_500() -> TestResult {
        let Err(encoding) = serde_json::from_str::<u8>("nope") else {
            return Err("`nope` should not decode".into());
        };

        let mut customers = MockCustomersService::new();

        customers
            .expect_create_customer()
            .once()
            .return_once(move |_, _| Err(CustomersServiceError::Encoding(encoding)));

        customers.expect_list_customers().never();
        customers.expect_get_customer().never();

        let res = TestClient::post("http://example.com/customers")
            .json(&json!({ "name": "Ali", "phone": "0300" }))
            .send(&make_service(customers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
