//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    affix_state::inject,
    prelude::*,
    session::{MemoryStore, SessionHandler},
};

use tailor_app::{
    context::AppContext,
    domain::{
        access::MockAccessService,
        customers::{
            MockCustomersService,
            measurements::MeasurementValue,
            records::{CustomerRecord, CustomerUuid},
        },
        licenses::{
            MockLicensesService,
            records::{LicenseKey, LicenseRecord, LicenseStatus},
        },
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_LICENSE_KEY: &str = "TEST-TENANT";

/// Cookie name salvo's session handler uses by default.
pub(crate) const SESSION_COOKIE: &str = "salvo.session.id";

const TEST_SESSION_SECRET: &[u8] =
    b"test-session-secret-test-session-secret-test-session-secret-test!";

#[expect(clippy::expect_used, reason = "constant fixture key")]
pub(crate) fn test_license() -> LicenseKey {
    LicenseKey::new(TEST_LICENSE_KEY).expect("valid test license key")
}

#[salvo::handler]
pub(crate) async fn inject_tenant(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_tenant_license(test_license());
    ctrl.call_next(req, depot, res).await;
}

#[expect(clippy::expect_used, reason = "fixture keys are literals")]
pub(crate) fn make_license(key: &str, status: LicenseStatus) -> LicenseRecord {
    LicenseRecord {
        key: LicenseKey::new(key).expect("valid license key"),
        owner_name: "Demo Tailor".to_string(),
        status,
        issued_at: Timestamp::UNIX_EPOCH,
        last_login_at: None,
        last_login_ip: None,
    }
}

pub(crate) fn make_customer(uuid: CustomerUuid, name: &str) -> CustomerRecord {
    CustomerRecord {
        uuid,
        owner: test_license(),
        name: name.to_string(),
        phone: "03001234567".to_string(),
        measurements: [("chest".to_string(), MeasurementValue::from(40_i64))].into(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn strict_licenses_mock() -> MockLicensesService {
    let mut licenses = MockLicensesService::new();

    licenses.expect_validate().never();
    licenses.expect_activate_session().never();
    licenses.expect_issue().never();
    licenses.expect_revoke().never();
    licenses.expect_toggle().never();
    licenses.expect_delete().never();
    licenses.expect_get().never();
    licenses.expect_list().never();
    licenses.expect_seed().never();

    licenses
}

pub(crate) fn strict_customers_mock() -> MockCustomersService {
    let mut customers = MockCustomersService::new();

    customers.expect_create_customer().never();
    customers.expect_list_customers().never();
    customers.expect_get_customer().never();

    customers
}

pub(crate) fn strict_access_mock() -> MockAccessService {
    let mut access = MockAccessService::new();

    access.expect_authorize().never();
    access.expect_login_tenant().never();
    access.expect_login_admin().never();

    access
}

pub(crate) fn state(
    licenses: MockLicensesService,
    customers: MockCustomersService,
    access: MockAccessService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        licenses: Arc::new(licenses),
        customers: Arc::new(customers),
        access: Arc::new(access),
    })
}

pub(crate) fn state_with_access(access: MockAccessService) -> Arc<State> {
    state(strict_licenses_mock(), strict_customers_mock(), access)
}

#[expect(clippy::expect_used, reason = "the fixture secret is long enough")]
pub(crate) fn session_handler() -> SessionHandler<MemoryStore> {
    SessionHandler::builder(MemoryStore::new(), TEST_SESSION_SECRET)
        .build()
        .expect("valid session handler")
}

/// Customer routes behind an already-authorized tenant.
pub(crate) fn customers_service(customers: MockCustomersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(
                strict_licenses_mock(),
                customers,
                strict_access_mock(),
            )))
            .hoop(inject_tenant)
            .push(route),
    )
}

/// License routes with the admin gate already passed.
pub(crate) fn licenses_service(licenses: MockLicensesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(
                licenses,
                strict_customers_mock(),
                strict_access_mock(),
            )))
            .push(route),
    )
}

/// Session routes with a real in-memory session store.
pub(crate) fn sessions_service(access: MockAccessService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(session_handler())
            .hoop(inject(state_with_access(access)))
            .push(route),
    )
}

/// The `name=value` pair of the session cookie set on a response.
pub(crate) fn session_cookie(res: &Response) -> Option<String> {
    res.cookies()
        .get(SESSION_COOKIE)
        .map(|cookie| format!("{}={}", cookie.name(), cookie.value()))
}
