//! App Router

use salvo::Router;

use crate::{auth, customers, licenses, sessions};

/// Login pages are open; customer routes need a tenant and license routes
/// need an admin.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("login").post(sessions::login::handler))
        .push(Router::with_path("logout").post(sessions::logout::handler))
        .push(
            Router::with_path("customers")
                .hoop(auth::middleware::require_tenant)
                .get(customers::index::handler)
                .post(customers::create::handler)
                .push(Router::with_path("{customer}").get(customers::get::handler)),
        )
        .push(
            Router::with_path("admin")
                .push(Router::with_path("login").post(sessions::admin_login::handler))
                .push(
                    Router::with_path("licenses")
                        .hoop(auth::middleware::require_admin)
                        .get(licenses::index::handler)
                        .post(licenses::create::handler)
                        .push(
                            Router::with_path("{license}")
                                .get(licenses::get::handler)
                                .delete(licenses::delete::handler)
                                .push(
                                    Router::with_path("toggle").post(licenses::toggle::handler),
                                )
                                .push(
                                    Router::with_path("revoke").post(licenses::revoke::handler),
                                ),
                        ),
                ),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        http::header::{COOKIE, LOCATION},
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use tailor_app::{
        context::{AppContext, AppSettings},
        domain::{
            access::{principal::RevocationPolicy, secret::AdminSecret},
            customers::{data::Partitioning, measurements::MeasurementSchema},
        },
    };

    use crate::{
        customers::{get::CustomerResponse, index::CustomersResponse},
        licenses::get::LicenseResponse,
        state::State,
        test_helpers::{session_cookie, session_handler},
    };

    use super::app_router;

    struct Harness {
        service: Service,
        _dir: tempfile::TempDir,
    }

    async fn harness(policy: RevocationPolicy) -> TestResult<Harness> {
        let dir = tempfile::tempdir()?;

        let app = AppContext::from_settings(AppSettings {
            database_url: format!("sqlite://{}", dir.path().join("tailor.db").display()),
            admin_secret: AdminSecret::new("letmein"),
            revocation_policy: policy,
            partitioning: Partitioning::PerTenant,
            measurement_schema: MeasurementSchema::default(),
            seed_demo_license: false,
        })
        .await?;

        let service = Service::new(
            Router::new()
                .hoop(session_handler())
                .hoop(inject(State::from_app_context(app)))
                .push(app_router()),
        );

        Ok(Harness { service, _dir: dir })
    }

    async fn login(
        service: &Service,
        path: &str,
        body: serde_json::Value,
    ) -> TestResult<String> {
        let res = TestClient::post(format!("http://example.com{path}"))
            .json(&body)
            .send(service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK), "login at {path} failed");

        Ok(session_cookie(&res).ok_or("missing session cookie")?)
    }

    fn location(res: &Response) -> Option<&str> {
        res.headers().get(LOCATION).and_then(|v| v.to_str().ok())
    }

    /// Issue ABC123, log in as its tenant, create a record, then deactivate
    /// the license and return what the live tenant session now gets.
    async fn deactivated_license_flow(policy: RevocationPolicy) -> TestResult<Response> {
        let Harness { service, _dir } = harness(policy).await?;

        let admin = login(&service, "/admin/login", json!({ "password": "letmein" })).await?;

        let res = TestClient::post("http://example.com/admin/licenses")
            .add_header(COOKIE, &admin, true)
            .json(&json!({ "license": "ABC123", "owner_name": "Demo Tailor" }))
            .send(&service)
            .await;
        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let tenant = login(&service, "/login", json!({ "license": "ABC123" })).await?;

        let res = TestClient::post("http://example.com/customers")
            .add_header(COOKIE, &tenant, true)
            .json(&json!({ "name": "Zubair", "phone": "03001234567" }))
            .send(&service)
            .await;
        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let mut res = TestClient::get("http://example.com/customers")
            .add_header(COOKIE, &tenant, true)
            .send(&service)
            .await;
        let listed: CustomersResponse = res.take_json().await?;
        assert_eq!(
            listed.customers.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            ["Zubair"]
        );

        let mut res = TestClient::post("http://example.com/admin/licenses/ABC123/toggle")
            .add_header(COOKIE, &admin, true)
            .send(&service)
            .await;
        let toggled: LicenseResponse = res.take_json().await?;
        assert_eq!(toggled.status, "inactive");

        let res = TestClient::post("http://example.com/login")
            .json(&json!({ "license": "ABC123" }))
            .send(&service)
            .await;
        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(TestClient::get("http://example.com/customers")
            .add_header(COOKIE, &tenant, true)
            .send(&service)
            .await)
    }

    #[tokio::test]
    async fn test_anonymous_requests_are_redirected_to_login_pages() -> TestResult {
        let Harness { service, _dir } = harness(RevocationPolicy::Immediate).await?;

        let res = TestClient::get("http://example.com/customers")
            .send(&service)
            .await;
        assert_eq!(res.status_code, Some(StatusCode::SEE_OTHER));
        assert_eq!(location(&res), Some("/login"));

        let res = TestClient::get("http://example.com/admin/licenses")
            .send(&service)
            .await;
        assert_eq!(res.status_code, Some(StatusCode::SEE_OTHER));
        assert_eq!(location(&res), Some("/admin/login"));

        Ok(())
    }

    #[tokio::test]
    async fn test_immediate_policy_ends_deactivated_sessions() -> TestResult {
        let res = deactivated_license_flow(RevocationPolicy::Immediate).await?;

        assert_eq!(res.status_code, Some(StatusCode::SEE_OTHER));
        assert_eq!(location(&res), Some("/login"));

        Ok(())
    }

    #[tokio::test]
    async fn test_lazy_policy_keeps_deactivated_sessions() -> TestResult {
        let res = deactivated_license_flow(RevocationPolicy::Lazy).await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_deleted_license_ends_sessions_under_either_policy() -> TestResult {
        for policy in [RevocationPolicy::Immediate, RevocationPolicy::Lazy] {
            let Harness { service, _dir } = harness(policy).await?;

            let admin = login(&service, "/admin/login", json!({ "password": "letmein" })).await?;

            TestClient::post("http://example.com/admin/licenses")
                .add_header(COOKIE, &admin, true)
                .json(&json!({ "license": "ABC123", "owner_name": "Demo Tailor" }))
                .send(&service)
                .await;

            let tenant = login(&service, "/login", json!({ "license": "ABC123" })).await?;

            let res = TestClient::delete("http://example.com/admin/licenses/ABC123")
                .add_header(COOKIE, &admin, true)
                .send(&service)
                .await;
            assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

            let res = TestClient::post("http://example.com/customers")
                .add_header(COOKIE, &tenant, true)
                .json(&json!({ "name": "Zubair", "phone": "0300" }))
                .send(&service)
                .await;

            assert_eq!(res.status_code, Some(StatusCode::SEE_OTHER), "{policy:?}");
            assert_eq!(location(&res), Some("/login"), "{policy:?}");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_numeric_and_null_measurements_are_stored() -> TestResult {
        let Harness { service, _dir } = harness(RevocationPolicy::Immediate).await?;

        let admin = login(&service, "/admin/login", json!({ "password": "letmein" })).await?;

        TestClient::post("http://example.com/admin/licenses")
            .add_header(COOKIE, &admin, true)
            .json(&json!({ "license": "ABC123", "owner_name": "Demo Tailor" }))
            .send(&service)
            .await;

        let tenant = login(&service, "/login", json!({ "license": "ABC123" })).await?;

        let mut res = TestClient::post("http://example.com/customers")
            .add_header(COOKIE, &tenant, true)
            .json(&json!({
                "name": "Zubair",
                "phone": "0300",
                "measurements": { "chest": 40, "sleeve": 24.5, "waist": null, "note": "loose" }
            }))
            .send(&service)
            .await;
        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let created: CustomerResponse = res.take_json().await?;

        let mut res = TestClient::get(format!("http://example.com/customers/{}", created.uuid))
            .add_header(COOKIE, &tenant, true)
            .send(&service)
            .await;
        let fetched: CustomerResponse = res.take_json().await?;

        assert_eq!(
            serde_json::to_value(&fetched.measurements)?,
            json!({ "chest": 40, "note": "loose", "sleeve": 24.5 })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_tenant_session_cannot_reach_admin_routes() -> TestResult {
        let Harness { service, _dir } = harness(RevocationPolicy::Immediate).await?;

        let admin = login(&service, "/admin/login", json!({ "password": "letmein" })).await?;

        TestClient::post("http://example.com/admin/licenses")
            .add_header(COOKIE, &admin, true)
            .json(&json!({ "license": "ABC123", "owner_name": "Demo Tailor" }))
            .send(&service)
            .await;

        let tenant = login(&service, "/login", json!({ "license": "ABC123" })).await?;

        let res = TestClient::get("http://example.com/admin/licenses")
            .add_header(COOKIE, &tenant, true)
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::SEE_OTHER));
        assert_eq!(location(&res), Some("/admin/login"));

        Ok(())
    }

    #[tokio::test]
    async fn test_logout_ends_the_session() -> TestResult {
        let Harness { service, _dir } = harness(RevocationPolicy::Immediate).await?;

        let admin = login(&service, "/admin/login", json!({ "password": "letmein" })).await?;

        let res = TestClient::post("http://example.com/logout")
            .add_header(COOKIE, &admin, true)
            .send(&service)
            .await;
        assert_eq!(res.status_code, Some(StatusCode::SEE_OTHER));

        let res = TestClient::get("http://example.com/admin/licenses")
            .add_header(COOKIE, &admin, true)
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::SEE_OTHER));
        assert_eq!(location(&res), Some("/admin/login"));

        Ok(())
    }
}
