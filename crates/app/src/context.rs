//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::{
        access::{
            AccessService, LicenseAccessService, principal::RevocationPolicy, secret::AdminSecret,
        },
        customers::{
            CustomersService, SqliteCustomersService, data::Partitioning,
            measurements::MeasurementSchema,
        },
        licenses::{LicensesService, LicensesServiceError, SqliteLicensesService, data::NewLicense},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] MigrateError),

    #[error("failed to seed demo license")]
    Seed(#[source] LicensesServiceError),
}

/// Everything the services need, resolved from configuration up front.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub database_url: String,
    pub admin_secret: AdminSecret,
    pub revocation_policy: RevocationPolicy,
    pub partitioning: Partitioning,
    pub measurement_schema: MeasurementSchema,
    pub seed_demo_license: bool,
}

#[derive(Clone)]
pub struct AppContext {
    pub licenses: Arc<dyn LicensesService>,
    pub customers: Arc<dyn CustomersService>,
    pub access: Arc<dyn AccessService>,
}

impl AppContext {
    /// Connect to the store, apply migrations and wire up the services.
    ///
    /// # Errors
    ///
    /// Returns an error when the database cannot be opened or migrated, or
    /// when seeding the demo license fails.
    pub async fn from_settings(settings: AppSettings) -> Result<Self, AppInitError> {
        let pool = database::connect(&settings.database_url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        let db = Db::new(pool);
        let licenses: Arc<dyn LicensesService> = Arc::new(SqliteLicensesService::new(db.clone()));

        if settings.seed_demo_license {
            let created = licenses
                .seed(NewLicense::demo())
                .await
                .map_err(AppInitError::Seed)?;

            if created {
                info!("demo license seeded");
            }
        }

        Ok(Self {
            customers: Arc::new(SqliteCustomersService::new(
                db,
                settings.measurement_schema,
                settings.partitioning,
            )),
            access: Arc::new(LicenseAccessService::new(
                licenses.clone(),
                settings.admin_secret,
                settings.revocation_policy,
            )),
            licenses,
        })
    }
}
