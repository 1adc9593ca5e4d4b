//! Customer Records

use jiff::Timestamp;

use crate::{
    domain::{customers::measurements::Measurements, licenses::records::LicenseKey},
    uuids::TypedUuid,
};

/// Customer UUID
pub type CustomerUuid = TypedUuid<CustomerRecord>;

/// Customer Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    pub uuid: CustomerUuid,

    /// License that created the record.
    pub owner: LicenseKey,

    pub name: String,
    pub phone: String,
    pub measurements: Measurements,

    /// Server-side creation time.
    pub created_at: Timestamp,
}
