//! # Identifiers
//!
//! Bruno stamps collections, items, environments and key/value rows with a
//! 21-character alphanumeric UID. The model treats UIDs as opaque strings:
//! a decoded UID is kept verbatim whatever its shape, and only validation
//! looks at the format.

use std::fmt;

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Length of a well-formed UID.
pub const UID_LENGTH: usize = 21;

/// Opaque identifier carried by most entities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uid(String);

impl Uid {
    /// Wrap a raw string without checking its shape.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Wrap a raw string, rejecting anything that is not a well-formed UID.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ModelError> {
        let raw = raw.into();
        if is_uid_shaped(&raw) {
            Ok(Self(raw))
        } else {
            Err(ModelError::MalformedUid(raw))
        }
    }

    /// Generate a fresh random UID.
    pub fn generate() -> Self {
        let raw: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(UID_LENGTH)
            .map(char::from)
            .collect();
        Self(raw)
    }

    /// Access the raw string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the UID is exactly 21 ASCII alphanumeric characters.
    pub fn is_well_formed(&self) -> bool {
        is_uid_shaped(&self.0)
    }
}

/// Shape check shared by [`Uid::parse`] and the validation format rule.
pub fn is_uid_shaped(raw: &str) -> bool {
    raw.len() == UID_LENGTH && raw.bytes().all(|b| b.is_ascii_alphanumeric())
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Uid {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Uid {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
