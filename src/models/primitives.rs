//! Strongly-typed identifiers for MercadoPago resources.
//!
//! Preference and preapproval ids are both opaque strings on the wire;
//! the newtypes keep one from being passed where the other is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a checkout preference.
///
/// # Example
///
/// ```
/// use mercadopago_rs::PreferenceId;
///
/// let id = PreferenceId::new("202809963-920c288b-4ebb-40be-966f-700250fa5370");
/// println!("Preference: {}", id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceId(String);

impl PreferenceId {
    /// Create a new preference id from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the preference id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PreferenceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for PreferenceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PreferenceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier of a preapproval (recurring payment authorization).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreapprovalId(String);

impl PreapprovalId {
    /// Create a new preapproval id.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the preapproval id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreapprovalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PreapprovalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for PreapprovalId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PreapprovalId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
