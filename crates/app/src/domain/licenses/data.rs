//! License Data

use crate::domain::licenses::records::LicenseKey;

/// Key issued by the demo seed on first startup.
pub const DEMO_LICENSE_KEY: &str = "DEMO123";

/// Owner name attached to the demo seed license.
pub const DEMO_LICENSE_OWNER: &str = "Demo Tailor";

/// New License Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLicense {
    /// Key to grant.
    pub key: LicenseKey,

    /// Display name of the shop the key belongs to.
    pub owner_name: String,
}

impl NewLicense {
    /// The fixed demo license seeded for single-shop installs.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            key: LicenseKey::from_static(DEMO_LICENSE_KEY),
            owner_name: DEMO_LICENSE_OWNER.to_string(),
        }
    }
}
