//! Customers Repository

use sqlx::{FromRow, Row, Sqlite, query, query_as, sqlite::SqliteRow};

use crate::{
    database::{Db, decode_timestamp, encode_timestamp, parse_column},
    domain::{
        customers::{
            data::SearchQuery,
            records::{CustomerRecord, CustomerUuid},
        },
        licenses::records::LicenseKey,
    },
};

const INSERT_CUSTOMER_SQL: &str = include_str!("sql/insert_customer.sql");
const LIST_CUSTOMERS_SQL: &str = include_str!("sql/list_customers.sql");
const SEARCH_CUSTOMERS_SQL: &str = include_str!("sql/search_customers.sql");
const GET_CUSTOMER_SQL: &str = include_str!("sql/get_customer.sql");

/// SQLite-backed customers repository.
///
/// A `scope` of `None` reads across every license.
#[derive(Debug, Clone)]
pub(crate) struct SqliteCustomersRepository {
    db: Db,
}

impl SqliteCustomersRepository {
    #[must_use]
    pub(crate) fn new(db: Db) -> Self {
        Self { db }
    }

    /// Insert a record. `measurements` is the record's measurements
    /// already encoded as JSON.
    pub(crate) async fn insert_customer(
        &self,
        customer: &CustomerRecord,
        measurements: &str,
    ) -> Result<(), sqlx::Error> {
        query(INSERT_CUSTOMER_SQL)
            .bind(customer.uuid.to_string())
            .bind(customer.owner.as_str())
            .bind(customer.name.as_str())
            .bind(customer.phone.as_str())
            .bind(measurements)
            .bind(encode_timestamp(customer.created_at))
            .execute(self.db.pool())
            .await?;

        Ok(())
    }

    pub(crate) async fn list_customers(
        &self,
        scope: Option<&LicenseKey>,
    ) -> Result<Vec<CustomerRecord>, sqlx::Error> {
        let scope = scope.map(LicenseKey::as_str);

        query_as::<Sqlite, CustomerRecord>(LIST_CUSTOMERS_SQL)
            .bind(scope)
            .bind(scope)
            .fetch_all(self.db.pool())
            .await
    }

    pub(crate) async fn search_customers(
        &self,
        scope: Option<&LicenseKey>,
        search: &SearchQuery,
    ) -> Result<Vec<CustomerRecord>, sqlx::Error> {
        let scope = scope.map(LicenseKey::as_str);
        let pattern = search.like_pattern();

        query_as::<Sqlite, CustomerRecord>(SEARCH_CUSTOMERS_SQL)
            .bind(scope)
            .bind(scope)
            .bind(pattern.as_str())
            .bind(pattern.as_str())
            .fetch_all(self.db.pool())
            .await
    }

    pub(crate) async fn get_customer(
        &self,
        scope: Option<&LicenseKey>,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, sqlx::Error> {
        let scope = scope.map(LicenseKey::as_str);

        query_as::<Sqlite, CustomerRecord>(GET_CUSTOMER_SQL)
            .bind(customer.to_string())
            .bind(scope)
            .bind(scope)
            .fetch_one(self.db.pool())
            .await
    }
}

impl<'r> FromRow<'r, SqliteRow> for CustomerRecord {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let uuid: String = row.try_get("uuid")?;
        let owner: String = row.try_get("license_key")?;
        let measurements: String = row.try_get("measurements")?;

        Ok(Self {
            uuid: parse_column::<CustomerUuid>("uuid", &uuid)?,
            owner: parse_column::<LicenseKey>("license_key", &owner)?,
            name: row.try_get("name")?,
            phone: row.try_get("phone")?,
            measurements: serde_json::from_str(&measurements).map_err(|source| {
                sqlx::Error::ColumnDecode {
                    index: "measurements".to_string(),
                    source: Box::new(source),
                }
            })?,
            created_at: decode_timestamp(row, "created_at")?,
        })
    }
}
