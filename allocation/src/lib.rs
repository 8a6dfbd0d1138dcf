//! Premine allocation descriptor.
//!
//! Turns a destination identifier and an [`AllocationPolicy`] into an exact
//! atomic amount plus its canonical hex encoding, ready to be embedded in a
//! genesis record by an external transaction builder:
//! - Destination validation (pluggable, no-op by default)
//! - Exact decimal scaling with explicit overflow detection
//! - Human-readable and JSON reports for the operator
//!
//! [`AllocationPolicy`]: premine_types::AllocationPolicy

pub mod builder;
pub mod descriptor;
pub mod report;
pub mod validator;

pub use builder::{atomic_amount, build, AllocationBuilder};
pub use descriptor::AllocationDescriptor;
pub use report::{render, render_json, Report};
pub use validator::{AcceptAll, DestinationValidator, PrefixValidator};
