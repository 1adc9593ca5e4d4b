//! Customer Records Config

use clap::Args;
use tailor_app::domain::customers::{
    data::Partitioning,
    measurements::{DEFAULT_MEASUREMENT_FIELDS, MeasurementSchema},
};

/// Customer record settings.
#[derive(Debug, Args)]
pub struct RecordsConfig {
    /// Whether licenses share customer records (per-tenant, shared)
    #[arg(long, env = "RECORD_PARTITIONING", default_value = "per-tenant")]
    pub partitioning: Partitioning,

    /// Measurement field names, comma separated
    #[arg(
        long,
        env = "MEASUREMENT_FIELDS",
        value_delimiter = ',',
        default_values_t = DEFAULT_MEASUREMENT_FIELDS.iter().map(ToString::to_string)
    )]
    pub measurement_fields: Vec<String>,
}

impl RecordsConfig {
    #[must_use]
    pub fn measurement_schema(&self) -> MeasurementSchema {
        MeasurementSchema::new(&self.measurement_fields)
    }
}
