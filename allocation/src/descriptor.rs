//! The validated allocation handed to the transaction builder.

use premine_types::{AllocationPolicy, AmountWidth, AtomicAmount, DestinationIdentifier};
use serde::Serialize;

/// A validated premine allocation.
///
/// Only [`AllocationBuilder`](crate::AllocationBuilder) creates these, so every
/// descriptor in hand has passed destination and policy checks and its amount
/// fits the policy's on-chain width. `atomic_amount_hex` is the artifact that
/// goes into the genesis record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AllocationDescriptor {
    destination: DestinationIdentifier,
    atomic_amount: AtomicAmount,
    atomic_amount_hex: String,
    policy: AllocationPolicy,
}

impl AllocationDescriptor {
    pub(crate) fn new(
        destination: DestinationIdentifier,
        atomic_amount: AtomicAmount,
        policy: AllocationPolicy,
    ) -> Self {
        Self {
            destination,
            atomic_amount_hex: atomic_amount.to_hex(),
            atomic_amount,
            policy,
        }
    }

    pub fn destination(&self) -> &DestinationIdentifier {
        &self.destination
    }

    pub fn atomic_amount(&self) -> AtomicAmount {
        self.atomic_amount
    }

    /// Lowercase hex of the atomic amount, no prefix, no padding.
    pub fn atomic_amount_hex(&self) -> &str {
        &self.atomic_amount_hex
    }

    pub fn policy(&self) -> &AllocationPolicy {
        &self.policy
    }

    /// True when a 64-bit amount field (CryptoNote `tx_out.amount`) cannot hold this amount.
    pub fn exceeds_u64(&self) -> bool {
        !self.atomic_amount.fits(AmountWidth::U64)
    }
}
