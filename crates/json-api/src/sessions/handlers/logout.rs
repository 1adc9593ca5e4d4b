//! Logout Handler

use salvo::prelude::*;

use tailor_app::domain::access::principal::LoginTarget;

use crate::{auth::middleware::redirect_to_login, extensions::*};

/// Logout Handler
///
/// Ends the current session's tenant or admin login.
#[endpoint(
    tags("sessions"),
    summary = "Logout",
    responses((status_code = StatusCode::SEE_OTHER, description = "Logged out")),
)]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) {
    depot.clear_principal();

    redirect_to_login(res, LoginTarget::TenantLogin);
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use crate::test_helpers::{sessions_service, strict_access_mock};

    use super::*;

    #[tokio::test]
    async fn test_logout_redirects_to_login() -> TestResult {
        let res = TestClient::post("http://example.com/logout")
            .send(&sessions_service(
                strict_access_mock(),
                Router::with_path("logout").post(handler),
            ))
            .await;

        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::SEE_OTHER));
        assert_eq!(location, Some("/login"));

        Ok(())
    }
}
