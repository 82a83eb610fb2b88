/// ID types for Portfolio entities
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string is not a valid ItsonId.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid ItsonId {0:?}: expected exactly 6 digits")]
pub struct InvalidItsonId(pub String);

/// 6-digit numeric identifier used as the public lookup key for a
/// user's project set.
///
/// The API requires exactly 6 ASCII digits. Validation is a caller
/// concern: client operations accept plain strings and forward them
/// as-is, so parse an `ItsonId` before calling when input comes from
/// an untrusted source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItsonId(String);

impl ItsonId {
    /// Parse and validate a 6-digit identifier.
    pub fn parse(id: impl Into<String>) -> Result<Self, InvalidItsonId> {
        let id = id.into();
        if id.len() == 6 && id.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(id))
        } else {
            Err(InvalidItsonId(id))
        }
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ItsonId {
    type Err = InvalidItsonId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ItsonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
