//! Destination identifier for a premine allocation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AllocationError;

/// The caller-supplied address that receives the allocation.
///
/// Opaque to this crate: the only rule enforced here is that it is not empty.
/// Scheme-specific rules (prefix, length, checksum) belong to a validator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DestinationIdentifier(String);

impl DestinationIdentifier {
    /// Wrap a raw string, rejecting the empty string.
    pub fn parse(raw: impl Into<String>) -> Result<Self, AllocationError> {
        let s = raw.into();
        if s.is_empty() {
            return Err(AllocationError::invalid_destination(
                "destination must not be empty",
            ));
        }
        Ok(Self(s))
    }

    /// Return the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for DestinationIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DestinationIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DestinationIdentifier {
    type Error = AllocationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<DestinationIdentifier> for String {
    fn from(id: DestinationIdentifier) -> Self {
        id.0
    }
}
