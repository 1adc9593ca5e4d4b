//! Principals and authorization decisions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::licenses::records::LicenseKey;

/// The resolved identity of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Principal {
    #[default]
    Anonymous,
    Tenant { license: LicenseKey },
    Admin,
}

impl Principal {
    #[must_use]
    pub fn tenant(license: LicenseKey) -> Self {
        Self::Tenant { license }
    }

    /// The role this principal holds, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Anonymous => None,
            Self::Tenant { .. } => Some(Role::Tenant),
            Self::Admin => Some(Role::Admin),
        }
    }

    #[must_use]
    pub fn license(&self) -> Option<&LicenseKey> {
        match self {
            Self::Tenant { license } => Some(license),
            Self::Anonymous | Self::Admin => None,
        }
    }
}

/// Role a route requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Tenant,
    Admin,
}

impl Role {
    /// Where an unauthorized request for this role is sent.
    #[must_use]
    pub const fn login_target(self) -> LoginTarget {
        match self {
            Self::Tenant => LoginTarget::TenantLogin,
            Self::Admin => LoginTarget::AdminLogin,
        }
    }
}

/// Login entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginTarget {
    TenantLogin,
    AdminLogin,
}

impl LoginTarget {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::TenantLogin => "/login",
            Self::AdminLogin => "/admin/login",
        }
    }
}

impl fmt::Display for LoginTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Redirect(LoginTarget),
}

impl Decision {
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// How a live tenant session reacts to its license being deactivated or
/// deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevocationPolicy {
    /// Re-validate the license on every request.
    #[default]
    Immediate,

    /// Trust the session until logout. Only new logins are blocked.
    Lazy,
}

#[derive(Debug, Error)]
#[error("unknown revocation policy `{0}`, expected `immediate` or `lazy`")]
pub struct UnknownRevocationPolicy(String);

impl FromStr for RevocationPolicy {
    type Err = UnknownRevocationPolicy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "immediate" => Ok(Self::Immediate),
            "lazy" => Ok(Self::Lazy),
            _ => Err(UnknownRevocationPolicy(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn principals_serialize_with_a_kind_tag() -> TestResult {
        let tenant = Principal::tenant(LicenseKey::new("ABC123")?);

        assert_eq!(
            serde_json::to_value(&tenant)?,
            json!({ "kind": "tenant", "license": "ABC123" })
        );
        assert_eq!(serde_json::to_value(Principal::Admin)?, json!({ "kind": "admin" }));

        let decoded: Principal =
            serde_json::from_value(json!({ "kind": "tenant", "license": "ABC123" }))?;

        assert_eq!(decoded, tenant);

        Ok(())
    }

    #[test]
    fn blank_license_in_session_payload_is_rejected() {
        let result =
            serde_json::from_value::<Principal>(json!({ "kind": "tenant", "license": "  " }));

        assert!(result.is_err(), "expected decode failure, got {result:?}");
    }

    #[test]
    fn roles_map_to_their_login_pages() {
        assert_eq!(Role::Tenant.login_target().path(), "/login");
        assert_eq!(Role::Admin.login_target().path(), "/admin/login");
    }

    #[test]
    fn revocation_policy_parses_case_insensitively() -> TestResult {
        assert_eq!("Immediate".parse::<RevocationPolicy>()?, RevocationPolicy::Immediate);
        assert_eq!(" lazy ".parse::<RevocationPolicy>()?, RevocationPolicy::Lazy);
        assert!("eventually".parse::<RevocationPolicy>().is_err());

        Ok(())
    }
}
