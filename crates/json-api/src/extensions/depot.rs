//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use tailor_app::domain::licenses::records::LicenseKey;

const TENANT_LICENSE_DEPOT_KEY: &str = "tenant_license";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Record the license an authorized tenant request acts for.
    fn insert_tenant_license(&mut self, license: LicenseKey);

    fn tenant_license_or_401(&self) -> Result<&LicenseKey, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_tenant_license(&mut self, license: LicenseKey) {
        self.insert(TENANT_LICENSE_DEPOT_KEY, license);
    }

    fn tenant_license_or_401(&self) -> Result<&LicenseKey, StatusError> {
        self.get::<LicenseKey>(TENANT_LICENSE_DEPOT_KEY)
            .map_err(|_ignored| StatusError::unauthorized())
    }
}
