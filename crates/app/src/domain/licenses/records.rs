//! License Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use rand::{rngs::OsRng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const GENERATED_KEY_PREFIX: &str = "TL";
const GENERATED_KEY_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const GENERATED_KEY_GROUPS: usize = 3;
const GENERATED_KEY_GROUP_LEN: usize = 4;

/// Characters that would split a key across URL path segments.
const RESERVED_KEY_CHARS: &[char] = &['/', '?', '#'];

/// License key. Surrounding whitespace is not significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LicenseKey(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LicenseKeyError {
    #[error("license key cannot be empty")]
    Empty,

    #[error("license key cannot contain `{0}`")]
    ReservedChar(char),
}

impl LicenseKey {
    /// Build a key from user input.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseKeyError::Empty`] when the input is blank, and
    /// [`LicenseKeyError::ReservedChar`] when it holds `/`, `?` or `#`: keys
    /// are addressed as a single path segment.
    pub fn new(value: impl Into<String>) -> Result<Self, LicenseKeyError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(LicenseKeyError::Empty);
        }

        if let Some(reserved) = trimmed.chars().find(|c| RESERVED_KEY_CHARS.contains(c)) {
            return Err(LicenseKeyError::ReservedChar(reserved));
        }

        if trimmed.len() == value.len() {
            return Ok(Self(value));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_string())
    }

    /// Generate a random key such as `TL-7KQ2-M9XD-4HRT`.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = OsRng;

        let groups: Vec<String> = (0..GENERATED_KEY_GROUPS)
            .map(|_| {
                (0..GENERATED_KEY_GROUP_LEN)
                    .filter_map(|_| GENERATED_KEY_ALPHABET.choose(&mut rng))
                    .map(|byte| char::from(*byte))
                    .collect()
            })
            .collect();

        Self(format!("{GENERATED_KEY_PREFIX}-{}", groups.join("-")))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LicenseKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl FromStr for LicenseKey {
    type Err = LicenseKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

impl TryFrom<String> for LicenseKey {
    type Error = LicenseKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LicenseKey> for String {
    fn from(value: LicenseKey) -> Self {
        value.0
    }
}

/// License Status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown license status `{0}`")]
pub struct UnknownLicenseStatus(String);

impl LicenseStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Display for LicenseStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseStatus {
    type Err = UnknownLicenseStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(UnknownLicenseStatus(other.to_string())),
        }
    }
}

/// License Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseRecord {
    /// Unique license key.
    pub key: LicenseKey,

    /// Shop the key was issued to.
    pub owner_name: String,

    /// Whether the key currently grants access.
    pub status: LicenseStatus,

    /// When the key was last issued (or re-issued).
    pub issued_at: Timestamp,

    /// Last successful activation.
    pub last_login_at: Option<Timestamp>,

    /// Client address of the last successful activation.
    pub last_login_ip: Option<String>,
}

impl LicenseRecord {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
