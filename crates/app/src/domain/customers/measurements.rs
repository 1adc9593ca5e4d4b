//! Measurement fields.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use thiserror::Error;

/// A single measurement: a number (`40`, `24.5`) or short text (`"2 inch"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeasurementValue {
    Number(Number),
    Text(String),
}

/// A submitted value was an array or an object.
#[derive(Debug, Error)]
#[error("measurement `{0}` must be a number, text or null")]
pub struct NotAScalar(pub String);

impl MeasurementValue {
    /// Read one submitted JSON value. `null` means the field was left empty.
    ///
    /// # Errors
    ///
    /// Returns [`NotAScalar`] for arrays and objects.
    pub fn from_json(name: &str, value: Value) -> Result<Option<Self>, NotAScalar> {
        match value {
            Value::Null => Ok(None),
            Value::Number(number) => Ok(Some(Self::Number(number))),
            Value::String(text) => Ok(Some(Self::Text(text))),
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
                Err(NotAScalar(name.to_string()))
            }
        }
    }

    fn normalized(self) -> Option<Self> {
        match self {
            Self::Number(number) => Some(Self::Number(number)),
            Self::Text(text) => {
                let text = text.trim();

                (!text.is_empty()).then(|| Self::Text(text.to_string()))
            }
        }
    }
}

impl From<&str> for MeasurementValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<i64> for MeasurementValue {
    fn from(number: i64) -> Self {
        Self::Number(number.into())
    }
}

impl From<MeasurementValue> for Value {
    fn from(value: MeasurementValue) -> Self {
        match value {
            MeasurementValue::Number(number) => Value::Number(number),
            MeasurementValue::Text(text) => Value::String(text),
        }
    }
}

impl fmt::Display for MeasurementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Named measurement values of a customer record.
pub type Measurements = BTreeMap<String, MeasurementValue>;

/// Measurements as submitted; a `None` value is a field left empty.
pub type SubmittedMeasurements = BTreeMap<String, Option<MeasurementValue>>;

/// Read a submitted JSON object of measurements.
///
/// # Errors
///
/// Returns [`NotAScalar`] naming the first field holding an array or object.
pub fn submitted_from_json<I>(fields: I) -> Result<SubmittedMeasurements, NotAScalar>
where
    I: IntoIterator<Item = (String, Value)>,
{
    fields
        .into_iter()
        .map(|(name, value)| {
            let value = MeasurementValue::from_json(&name, value)?;

            Ok((name, value))
        })
        .collect()
}

/// Garment fields recorded by a default install.
pub const DEFAULT_MEASUREMENT_FIELDS: &[&str] = &[
    "length", "chest", "waist", "shoulder", "sleeve", "collar", "poncha", "batton", "packet",
    "zip", "shalwar", "ghara", "amount", "note",
];

/// The configured set of measurement field names.
///
/// Records are schema-agnostic: the schema only decides which submitted
/// names are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementSchema {
    fields: Vec<String>,
}

impl MeasurementSchema {
    /// Build a schema from field names. Names are trimmed; blanks and
    /// duplicates are dropped, first occurrence wins.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = Vec::new();

        for field in fields {
            let name = field.as_ref().trim();

            if !name.is_empty() && !names.iter().any(|existing| existing == name) {
                names.push(name.to_string());
            }
        }

        Self { fields: names }
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field == name)
    }

    /// Keep the configured fields that carry a value. Empty fields, either
    /// `null` or blank text, are dropped; text is trimmed.
    #[must_use]
    pub fn retain(&self, submitted: SubmittedMeasurements) -> Measurements {
        submitted
            .into_iter()
            .filter(|(name, _)| self.contains(name))
            .filter_map(|(name, value)| Some((name, value?.normalized()?)))
            .collect()
    }
}

impl Default for MeasurementSchema {
    fn default() -> Self {
        Self::new(DEFAULT_MEASUREMENT_FIELDS)
    }
}
