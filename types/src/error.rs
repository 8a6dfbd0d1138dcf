//! Top-level error type shared across crates.

use thiserror::Error;

use crate::amount::AmountWidth;

/// Every way building a premine allocation can fail.
///
/// None of these are retryable: the computation is deterministic, so the
/// same inputs always produce the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("invalid destination: {reason}")]
    InvalidDestination { reason: String },

    #[error("invalid allocation policy: {reason}")]
    InvalidPolicy { reason: String },

    #[error("atomic amount for {display} at precision {precision} does not fit in a {width} amount field")]
    AmountOverflow {
        display: String,
        precision: i32,
        width: AmountWidth,
    },

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl AllocationError {
    pub fn invalid_destination(reason: impl Into<String>) -> Self {
        Self::InvalidDestination {
            reason: reason.into(),
        }
    }

    pub fn invalid_policy(reason: impl Into<String>) -> Self {
        Self::InvalidPolicy {
            reason: reason.into(),
        }
    }

    /// Short machine-friendly tag, used in logs and by the CLI.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidDestination { .. } => "invalid_destination",
            Self::InvalidPolicy { .. } => "invalid_policy",
            Self::AmountOverflow { .. } => "amount_overflow",
            Self::InvalidAmount(_) => "invalid_amount",
            Self::Serialization(_) => "serialization",
        }
    }
}
