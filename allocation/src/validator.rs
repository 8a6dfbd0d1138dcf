//! Pluggable destination validation.
//!
//! The builder only knows that a destination is non-empty. Anything stricter,
//! such as address prefixes or lengths, comes from a [`DestinationValidator`]
//! handed to [`AllocationBuilder`](crate::AllocationBuilder).

use premine_types::DestinationIdentifier;

/// Characters of the Base58 alphabet used by CryptoNote-style addresses.
const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// A scheme-specific check on a destination identifier.
pub trait DestinationValidator: Send + Sync {
    /// Human-readable name of this validator.
    fn name(&self) -> &str;

    /// Accept the destination, or explain why it is rejected.
    fn validate(&self, destination: &DestinationIdentifier) -> Result<(), String>;
}

/// Accepts every non-empty destination.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl DestinationValidator for AcceptAll {
    fn name(&self) -> &str {
        "accept-all"
    }

    fn validate(&self, _destination: &DestinationIdentifier) -> Result<(), String> {
        Ok(())
    }
}

/// Shape check for Base58 addresses: required prefix, optional exact length,
/// and Base58 characters only. Checksums are not verified.
#[derive(Clone, Debug)]
pub struct PrefixValidator {
    prefix: String,
    expected_len: Option<usize>,
}

impl PrefixValidator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            expected_len: None,
        }
    }

    /// Also require exactly `len` characters, prefix included.
    pub fn with_length(mut self, len: usize) -> Self {
        self.expected_len = Some(len);
        self
    }
}

impl DestinationValidator for PrefixValidator {
    fn name(&self) -> &str {
        "prefix"
    }

    fn validate(&self, destination: &DestinationIdentifier) -> Result<(), String> {
        let raw = destination.as_str();
        if !raw.starts_with(&self.prefix) {
            return Err(format!("expected prefix {:?}", self.prefix));
        }
        if let Some(expected) = self.expected_len {
            let actual = destination.char_len();
            if actual != expected {
                return Err(format!("expected {expected} characters, got {actual}"));
            }
        }
        if let Some(bad) = raw.chars().find(|c| !BASE58_ALPHABET.contains(*c)) {
            return Err(format!("character {bad:?} is not in the Base58 alphabet"));
        }
        Ok(())
    }
}

/// Closures work as ad-hoc validators.
impl<F> DestinationValidator for F
where
    F: Fn(&DestinationIdentifier) -> Result<(), String> + Send + Sync,
{
    fn name(&self) -> &str {
        "custom"
    }

    fn validate(&self, destination: &DestinationIdentifier) -> Result<(), String> {
        self(destination)
    }
}
