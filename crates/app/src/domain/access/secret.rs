//! Admin secret.

use std::fmt;

use zeroize::Zeroize;

/// The shared admin password.
///
/// Admin access is a single "is-admin" flag: the secret identifies no
/// particular person.
#[derive(Clone)]
pub struct AdminSecret {
    value: String,
}

impl AdminSecret {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Equality check against a submitted password.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        !self.value.is_empty() && self.value == candidate
    }
}

impl fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminSecret(**redacted**)")
    }
}

impl Drop for AdminSecret {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}
