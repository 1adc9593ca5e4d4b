//! Licenses Repository

use jiff::Timestamp;
use sqlx::{FromRow, Row, Sqlite, query, query_as, sqlite::SqliteRow};

use crate::{
    database::{Db, decode_optional_timestamp, decode_timestamp, encode_timestamp, parse_column},
    domain::licenses::{
        data::NewLicense,
        records::{LicenseKey, LicenseRecord, LicenseStatus},
    },
};

const FIND_LICENSE_SQL: &str = include_str!("sql/find_license.sql");
const FIND_ACTIVE_LICENSE_SQL: &str = include_str!("sql/find_active_license.sql");
const LIST_LICENSES_SQL: &str = include_str!("sql/list_licenses.sql");
const TOUCH_LICENSE_LOGIN_SQL: &str = include_str!("sql/touch_license_login.sql");
const UPSERT_LICENSE_SQL: &str = include_str!("sql/upsert_license.sql");
const SEED_LICENSE_SQL: &str = include_str!("sql/seed_license.sql");
const TOGGLE_LICENSE_SQL: &str = include_str!("sql/toggle_license.sql");
const DEACTIVATE_LICENSE_SQL: &str = include_str!("sql/deactivate_license.sql");
const DELETE_LICENSE_SQL: &str = include_str!("sql/delete_license.sql");

/// SQLite-backed licenses repository.
#[derive(Debug, Clone)]
pub(crate) struct SqliteLicensesRepository {
    db: Db,
}

impl SqliteLicensesRepository {
    #[must_use]
    pub(crate) fn new(db: Db) -> Self {
        Self { db }
    }

    pub(crate) async fn find_license(
        &self,
        key: &LicenseKey,
    ) -> Result<Option<LicenseRecord>, sqlx::Error> {
        query_as::<Sqlite, LicenseRecord>(FIND_LICENSE_SQL)
            .bind(key.as_str())
            .fetch_optional(self.db.pool())
            .await
    }

    pub(crate) async fn find_active_license(
        &self,
        key: &LicenseKey,
    ) -> Result<Option<LicenseRecord>, sqlx::Error> {
        query_as::<Sqlite, LicenseRecord>(FIND_ACTIVE_LICENSE_SQL)
            .bind(key.as_str())
            .fetch_optional(self.db.pool())
            .await
    }

    pub(crate) async fn list_licenses(&self) -> Result<Vec<LicenseRecord>, sqlx::Error> {
        query_as::<Sqlite, LicenseRecord>(LIST_LICENSES_SQL)
            .fetch_all(self.db.pool())
            .await
    }

    pub(crate) async fn touch_license_login(
        &self,
        key: &LicenseKey,
        client_ip: &str,
        now: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(TOUCH_LICENSE_LOGIN_SQL)
            .bind(encode_timestamp(now))
            .bind(client_ip)
            .bind(key.as_str())
            .execute(self.db.pool())
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn upsert_license(
        &self,
        license: &NewLicense,
        issued_at: Timestamp,
    ) -> Result<LicenseRecord, sqlx::Error> {
        query_as::<Sqlite, LicenseRecord>(UPSERT_LICENSE_SQL)
            .bind(license.key.as_str())
            .bind(license.owner_name.as_str())
            .bind(encode_timestamp(issued_at))
            .fetch_one(self.db.pool())
            .await
    }

    pub(crate) async fn seed_license(
        &self,
        license: &NewLicense,
        issued_at: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(SEED_LICENSE_SQL)
            .bind(license.key.as_str())
            .bind(license.owner_name.as_str())
            .bind(encode_timestamp(issued_at))
            .execute(self.db.pool())
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn toggle_license(
        &self,
        key: &LicenseKey,
    ) -> Result<Option<LicenseRecord>, sqlx::Error> {
        query_as::<Sqlite, LicenseRecord>(TOGGLE_LICENSE_SQL)
            .bind(key.as_str())
            .fetch_optional(self.db.pool())
            .await
    }

    pub(crate) async fn deactivate_license(
        &self,
        key: &LicenseKey,
    ) -> Result<Option<LicenseRecord>, sqlx::Error> {
        query_as::<Sqlite, LicenseRecord>(DEACTIVATE_LICENSE_SQL)
            .bind(key.as_str())
            .fetch_optional(self.db.pool())
            .await
    }

    pub(crate) async fn delete_license(&self, key: &LicenseKey) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_LICENSE_SQL)
            .bind(key.as_str())
            .execute(self.db.pool())
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, SqliteRow> for LicenseRecord {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let key: String = row.try_get("license_key")?;
        let status: String = row.try_get("status")?;

        Ok(Self {
            key: parse_column::<LicenseKey>("license_key", &key)?,
            owner_name: row.try_get("owner_name")?,
            status: parse_column::<LicenseStatus>("status", &status)?,
            issued_at: decode_timestamp(row, "issued_at")?,
            last_login_at: decode_optional_timestamp(row, "last_login_at")?,
            last_login_ip: row.try_get("last_login_ip")?,
        })
    }
}
