//! Database connection management

use std::str::FromStr;

use jiff::Timestamp;
use sqlx::{
    Row, SqlitePool,
    migrate::MigrateError,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
};

/// Handle to the embedded store shared by every repository.
#[derive(Debug, Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Connect to the `SQLite` store, creating the database file when missing.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the file cannot be opened.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new().connect_with(options).await
}

/// Apply the embedded schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Timestamps are persisted as RFC 3339 text.
pub(crate) fn encode_timestamp(timestamp: Timestamp) -> String {
    timestamp.to_string()
}

pub(crate) fn decode_timestamp(row: &SqliteRow, column: &str) -> sqlx::Result<Timestamp> {
    let raw: String = row.try_get(column)?;

    parse_column(column, &raw)
}

pub(crate) fn decode_optional_timestamp(
    row: &SqliteRow,
    column: &str,
) -> sqlx::Result<Option<Timestamp>> {
    row.try_get::<Option<String>, _>(column)?
        .map(|raw| parse_column(column, &raw))
        .transpose()
}

/// Parse a text column into `T`, reporting failures as column decode errors.
pub(crate) fn parse_column<T>(column: &str, raw: &str) -> sqlx::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse::<T>().map_err(|source| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(source),
    })
}
