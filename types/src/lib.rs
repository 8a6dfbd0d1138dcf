//! Fundamental types for premine allocation.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! display and atomic amounts, destination identifiers, the allocation policy,
//! and the error type.

pub mod address;
pub mod amount;
pub mod error;
pub mod params;

pub use address::DestinationIdentifier;
pub use amount::{AmountWidth, AtomicAmount, DisplayAmount};
pub use error::AllocationError;
pub use params::AllocationPolicy;
