//! Allocation descriptor builder.
//!
//! `atomic = display_amount × 10^decimal_precision`, computed with checked
//! u128 arithmetic and then bounded by the policy's on-chain amount width.
//! Nothing is rounded, truncated or wrapped: an amount that cannot be
//! represented exactly is an error.

use premine_types::{AllocationError, AllocationPolicy, AtomicAmount, DestinationIdentifier};

use crate::descriptor::AllocationDescriptor;
use crate::validator::{AcceptAll, DestinationValidator};

/// Builds [`AllocationDescriptor`]s, checking destinations with an injected validator.
pub struct AllocationBuilder {
    validator: Box<dyn DestinationValidator>,
}

impl AllocationBuilder {
    /// A builder that accepts any non-empty destination.
    pub fn new() -> Self {
        Self::from_boxed(Box::new(AcceptAll))
    }

    pub fn with_validator(validator: impl DestinationValidator + 'static) -> Self {
        Self::from_boxed(Box::new(validator))
    }

    pub fn from_boxed(validator: Box<dyn DestinationValidator>) -> Self {
        Self { validator }
    }

    pub fn validator_name(&self) -> &str {
        self.validator.name()
    }

    /// Validate the inputs and compute the allocation.
    ///
    /// # Errors
    ///
    /// - [`AllocationError::InvalidDestination`] if `destination` is empty or
    ///   the validator rejects it.
    /// - [`AllocationError::InvalidPolicy`] if the display amount or precision
    ///   is negative, or the display amount has more fractional digits than
    ///   the precision allows.
    /// - [`AllocationError::AmountOverflow`] if the exact atomic amount does
    ///   not fit the policy's amount width.
    pub fn build(
        &self,
        destination: &str,
        policy: &AllocationPolicy,
    ) -> Result<AllocationDescriptor, AllocationError> {
        let result = self.try_build(destination, policy);
        match &result {
            Ok(descriptor) => tracing::debug!(
                destination = %descriptor.destination(),
                atomic = %descriptor.atomic_amount(),
                hex = descriptor.atomic_amount_hex(),
                "allocation built"
            ),
            Err(e) => tracing::warn!(kind = e.kind(), error = %e, "allocation rejected"),
        }
        result
    }

    fn try_build(
        &self,
        destination: &str,
        policy: &AllocationPolicy,
    ) -> Result<AllocationDescriptor, AllocationError> {
        let destination = DestinationIdentifier::parse(destination)?;
        self.validator.validate(&destination).map_err(|reason| {
            AllocationError::invalid_destination(format!(
                "{reason} ({} validator)",
                self.validator.name()
            ))
        })?;

        let atomic = atomic_amount(policy)?;
        Ok(AllocationDescriptor::new(destination, atomic, policy.clone()))
    }
}

impl Default for AllocationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a descriptor with no destination validation beyond non-emptiness.
pub fn build(
    destination: &str,
    policy: &AllocationPolicy,
) -> Result<AllocationDescriptor, AllocationError> {
    AllocationBuilder::new().build(destination, policy)
}

/// Check the policy and compute its exact atomic amount.
pub fn atomic_amount(policy: &AllocationPolicy) -> Result<AtomicAmount, AllocationError> {
    let display = policy.display_amount;

    if display.is_negative() {
        return Err(AllocationError::invalid_policy(format!(
            "display amount must not be negative, got {display}"
        )));
    }
    let precision = u32::try_from(policy.decimal_precision).map_err(|_| {
        AllocationError::invalid_policy(format!(
            "decimal precision must not be negative, got {}",
            policy.decimal_precision
        ))
    })?;
    if display.scale() > precision {
        return Err(AllocationError::invalid_policy(format!(
            "display amount {display} has {} fractional digits but the base unit only supports {precision}",
            display.scale()
        )));
    }

    let overflow = || AllocationError::AmountOverflow {
        display: display.to_string(),
        precision: policy.decimal_precision,
        width: policy.amount_width,
    };
    let atomic = display
        .to_atomic_units(precision)
        .map(AtomicAmount::new)
        .ok_or_else(overflow)?;
    if !atomic.fits(policy.amount_width) {
        return Err(overflow());
    }
    Ok(atomic)
}
