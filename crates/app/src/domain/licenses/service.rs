//! Licenses service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::licenses::{
        data::NewLicense,
        errors::LicensesServiceError,
        records::{LicenseKey, LicenseRecord},
        repository::SqliteLicensesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SqliteLicensesService {
    repository: SqliteLicensesRepository,
}

impl SqliteLicensesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            repository: SqliteLicensesRepository::new(db),
        }
    }
}

#[async_trait]
impl LicensesService for SqliteLicensesService {
    async fn validate(&self, key: &LicenseKey) -> Result<LicenseRecord, LicensesServiceError> {
        self.repository
            .find_active_license(key)
            .await?
            .ok_or(LicensesServiceError::NotFound)
    }

    async fn activate_session(
        &self,
        key: &LicenseKey,
        client_ip: &str,
        now: Timestamp,
    ) -> Result<(), LicensesServiceError> {
        let rows_affected = self
            .repository
            .touch_license_login(key, client_ip, now)
            .await?;

        if rows_affected == 0 {
            return Err(LicensesServiceError::NotFound);
        }

        debug!(license = %key, client_ip, "license login recorded");

        Ok(())
    }

    async fn issue(&self, license: NewLicense) -> Result<LicenseRecord, LicensesServiceError> {
        let record = self
            .repository
            .upsert_license(&license, Timestamp::now())
            .await?;

        info!(license = %record.key, owner = %record.owner_name, "license issued");

        Ok(record)
    }

    async fn revoke(&self, key: &LicenseKey) -> Result<LicenseRecord, LicensesServiceError> {
        let record = self
            .repository
            .deactivate_license(key)
            .await?
            .ok_or(LicensesServiceError::NotFound)?;

        info!(license = %key, "license revoked");

        Ok(record)
    }

    async fn toggle(&self, key: &LicenseKey) -> Result<LicenseRecord, LicensesServiceError> {
        let record = self
            .repository
            .toggle_license(key)
            .await?
            .ok_or(LicensesServiceError::NotFound)?;

        info!(license = %key, status = %record.status, "license toggled");

        Ok(record)
    }

    async fn delete(&self, key: &LicenseKey) -> Result<(), LicensesServiceError> {
        let rows_affected = self.repository.delete_license(key).await?;

        if rows_affected == 0 {
            return Err(LicensesServiceError::NotFound);
        }

        info!(license = %key, "license deleted");

        Ok(())
    }

    async fn get(&self, key: &LicenseKey) -> Result<LicenseRecord, LicensesServiceError> {
        self.repository
            .find_license(key)
            .await?
            .ok_or(LicensesServiceError::NotFound)
    }

    async fn list(&self) -> Result<Vec<LicenseRecord>, LicensesServiceError> {
        self.repository.list_licenses().await.map_err(Into::into)
    }

    async fn seed(&self, license: NewLicense) -> Result<bool, LicensesServiceError> {
        let inserted = self
            .repository
            .seed_license(&license, Timestamp::now())
            .await?
            > 0;

        if inserted {
            info!(license = %license.key, "seed license created");
        }

        Ok(inserted)
    }
}

#[automock]
#[async_trait]
/// License authority operations.
pub trait LicensesService: Send + Sync {
    /// Look up an active license. Missing and inactive keys are both `NotFound`.
    async fn validate(&self, key: &LicenseKey) -> Result<LicenseRecord, LicensesServiceError>;

    /// Stamp the last-login metadata after a successful validation.
    async fn activate_session(
        &self,
        key: &LicenseKey,
        client_ip: &str,
        now: Timestamp,
    ) -> Result<(), LicensesServiceError>;

    /// Insert or replace a license; the result is active with no login metadata.
    async fn issue(&self, license: NewLicense) -> Result<LicenseRecord, LicensesServiceError>;

    /// Soft revoke: mark the license inactive. Reversible through `toggle`.
    async fn revoke(&self, key: &LicenseKey) -> Result<LicenseRecord, LicensesServiceError>;

    /// Flip the license between active and inactive.
    async fn toggle(&self, key: &LicenseKey) -> Result<LicenseRecord, LicensesServiceError>;

    /// Hard revoke: remove the license row.
    async fn delete(&self, key: &LicenseKey) -> Result<(), LicensesServiceError>;

    /// Fetch a license regardless of status.
    async fn get(&self, key: &LicenseKey) -> Result<LicenseRecord, LicensesServiceError>;

    /// All licenses ordered by key.
    async fn list(&self) -> Result<Vec<LicenseRecord>, LicensesServiceError>;

    /// Insert the license only if its key is unused. Returns whether a row was created.
    async fn seed(&self, license: NewLicense) -> Result<bool, LicensesServiceError>;
}
