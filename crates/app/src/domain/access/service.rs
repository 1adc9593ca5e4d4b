//! Access service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, info, warn};

use crate::domain::{
    access::{
        errors::AccessError,
        principal::{Decision, Principal, RevocationPolicy, Role},
        secret::AdminSecret,
    },
    licenses::{
        LicensesService, LicensesServiceError,
        records::{LicenseKey, LicenseRecord},
    },
};

/// Result of a successful tenant login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantLogin {
    pub principal: Principal,
    pub license: LicenseRecord,
}

/// Access gate backed by the license authority.
#[derive(Clone)]
pub struct LicenseAccessService {
    licenses: Arc<dyn LicensesService>,
    admin_secret: AdminSecret,
    policy: RevocationPolicy,
}

impl LicenseAccessService {
    #[must_use]
    pub fn new(
        licenses: Arc<dyn LicensesService>,
        admin_secret: AdminSecret,
        policy: RevocationPolicy,
    ) -> Self {
        Self {
            licenses,
            admin_secret,
            policy,
        }
    }

    /// Under `Immediate` the key must still be active. Under `Lazy` it only
    /// has to exist: deactivation is trusted to the session, deletion is not.
    async fn authorize_tenant(&self, license: &LicenseKey) -> Result<Decision, AccessError> {
        let lookup = match self.policy {
            RevocationPolicy::Immediate => self.licenses.validate(license).await,
            RevocationPolicy::Lazy => self.licenses.get(license).await,
        };

        match lookup {
            Ok(_) => Ok(Decision::Allowed),
            Err(LicensesServiceError::NotFound) => {
                debug!(license = %license, policy = ?self.policy, "session license revoked");

                Ok(Decision::Redirect(Role::Tenant.login_target()))
            }
            Err(error) => Err(error.into()),
        }
    }
}

impl std::fmt::Debug for LicenseAccessService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LicenseAccessService")
            .field("admin_secret", &self.admin_secret)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl AccessService for LicenseAccessService {
    async fn authorize(&self, principal: &Principal, role: Role) -> Result<Decision, AccessError> {
        match (principal, role) {
            (Principal::Tenant { license }, Role::Tenant) => self.authorize_tenant(license).await,
            (Principal::Admin, Role::Admin) => Ok(Decision::Allowed),
            _ => Ok(Decision::Redirect(role.login_target())),
        }
    }

    async fn login_tenant(
        &self,
        key: &LicenseKey,
        client_ip: &str,
    ) -> Result<TenantLogin, AccessError> {
        let license = match self.licenses.validate(key).await {
            Ok(license) => license,
            Err(LicensesServiceError::NotFound) => {
                warn!(license = %key, client_ip, "rejected tenant login");

                return Err(AccessError::InvalidLicense);
            }
            Err(error) => return Err(error.into()),
        };

        let now = Timestamp::now();

        match self.licenses.activate_session(key, client_ip, now).await {
            Ok(()) => {}
            // Deleted between validation and activation.
            Err(LicensesServiceError::NotFound) => return Err(AccessError::InvalidLicense),
            Err(error) => return Err(error.into()),
        }

        info!(license = %key, client_ip, "tenant logged in");

        Ok(TenantLogin {
            principal: Principal::tenant(license.key.clone()),
            license: LicenseRecord {
                last_login_at: Some(now),
                last_login_ip: Some(client_ip.to_string()),
                ..license
            },
        })
    }

    async fn login_admin(&self, password: &str) -> Result<Principal, AccessError> {
        if !self.admin_secret.matches(password) {
            warn!("rejected admin login");

            return Err(AccessError::InvalidAdminSecret);
        }

        info!("admin logged in");

        Ok(Principal::Admin)
    }
}

#[automock]
#[async_trait]
/// Session gate operations.
pub trait AccessService: Send + Sync {
    /// Decide whether `principal` may reach a route requiring `role`.
    ///
    /// Evaluated on every request. Store failures propagate as errors.
    async fn authorize(&self, principal: &Principal, role: Role) -> Result<Decision, AccessError>;

    /// Validate a license key and record the login.
    async fn login_tenant(
        &self,
        key: &LicenseKey,
        client_ip: &str,
    ) -> Result<TenantLogin, AccessError>;

    /// Check the shared admin secret.
    async fn login_admin(&self, password: &str) -> Result<Principal, AccessError>;
}
