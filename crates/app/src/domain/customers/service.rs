//! Customers service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        customers::{
            data::{NewCustomer, Partitioning, SearchQuery},
            errors::CustomersServiceError,
            measurements::MeasurementSchema,
            records::{CustomerRecord, CustomerUuid},
            repository::SqliteCustomersRepository,
        },
        licenses::records::LicenseKey,
    },
};

#[derive(Debug, Clone)]
pub struct SqliteCustomersService {
    repository: SqliteCustomersRepository,
    schema: MeasurementSchema,
    partitioning: Partitioning,
}

impl SqliteCustomersService {
    #[must_use]
    pub fn new(db: Db, schema: MeasurementSchema, partitioning: Partitioning) -> Self {
        Self {
            repository: SqliteCustomersRepository::new(db),
            schema,
            partitioning,
        }
    }

    fn scope<'a>(&self, owner: &'a LicenseKey) -> Option<&'a LicenseKey> {
        match self.partitioning {
            Partitioning::PerTenant => Some(owner),
            Partitioning::Shared => None,
        }
    }
}

#[async_trait]
impl CustomersService for SqliteCustomersService {
    async fn create_customer(
        &self,
        owner: &LicenseKey,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let record = CustomerRecord {
            uuid: CustomerUuid::new(),
            owner: owner.clone(),
            name: customer.name,
            phone: customer.phone,
            measurements: self.schema.retain(customer.measurements),
            created_at: Timestamp::now(),
        };

        let measurements = serde_json::to_string(&record.measurements)?;

        self.repository.insert_customer(&record, &measurements).await?;

        debug!(license = %owner, customer = %record.uuid, "customer record created");

        Ok(record)
    }

    async fn list_customers(
        &self,
        owner: &LicenseKey,
        search: Option<SearchQuery>,
    ) -> Result<Vec<CustomerRecord>, CustomersServiceError> {
        let scope = self.scope(owner);

        let customers = match search {
            Some(search) => self.repository.search_customers(scope, &search).await?,
            None => self.repository.list_customers(scope).await?,
        };

        Ok(customers)
    }

    async fn get_customer(
        &self,
        owner: &LicenseKey,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        self.repository
            .get_customer(self.scope(owner), customer)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
/// Customer record operations, always on behalf of a licensed shop.
pub trait CustomersService: Send + Sync {
    /// Creates a record owned by `owner`, stamped with the current time.
    async fn create_customer(
        &self,
        owner: &LicenseKey,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Lists records visible to `owner`. Without a search, newest first;
    /// with one, in insertion order.
    async fn list_customers(
        &self,
        owner: &LicenseKey,
        search: Option<SearchQuery>,
    ) -> Result<Vec<CustomerRecord>, CustomersServiceError>;

    /// Fetches a single record visible to `owner`.
    async fn get_customer(
        &self,
        owner: &LicenseKey,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, CustomersServiceError>;
}
