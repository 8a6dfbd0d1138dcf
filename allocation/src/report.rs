//! Operator-facing rendering of an allocation descriptor.

use std::fmt;

use premine_types::AllocationError;
use premine_utils::group_digits;

use crate::descriptor::AllocationDescriptor;

const RULE: &str = "========================================";

/// Human-readable report for one descriptor.
///
/// Formatting is deterministic: the same descriptor always renders to the
/// same bytes.
pub struct Report<'a> {
    descriptor: &'a AllocationDescriptor,
}

impl<'a> Report<'a> {
    pub fn new(descriptor: &'a AllocationDescriptor) -> Self {
        Self { descriptor }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.descriptor;
        let policy = d.policy();
        let atomic = d.atomic_amount().to_string();

        writeln!(f, "{RULE}")?;
        writeln!(f, "  Premine Genesis Allocation")?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;
        writeln!(f, "Destination       : {}", d.destination())?;
        writeln!(
            f,
            "Display amount    : {} {}",
            group_digits(&policy.display_amount.to_string()),
            policy.ticker
        )?;
        writeln!(f, "Decimal precision : {}", policy.decimal_precision)?;
        writeln!(f, "Atomic amount     : {atomic}")?;
        writeln!(f, "                    ({} atomic units)", group_digits(&atomic))?;
        writeln!(f, "Atomic amount hex : {}", d.atomic_amount_hex())?;
        writeln!(f, "Amount field      : {}", policy.amount_width)?;

        if d.exceeds_u64() {
            writeln!(f)?;
            writeln!(
                f,
                "WARNING: this amount exceeds {} (u64::MAX). A ledger that stores",
                u64::MAX
            )?;
            writeln!(
                f,
                "output amounts as 64-bit integers cannot hold it; split the premine"
            )?;
            writeln!(f, "across several outputs or widen the amount field.")?;
        }

        writeln!(f)?;
        writeln!(f, "Next steps:")?;
        writeln!(
            f,
            "1. Give the atomic amount hex above to the genesis transaction builder"
        )?;
        writeln!(f, "   as the premine output amount for {}.", d.destination())?;
        writeln!(f, "2. Put the resulting transaction blob in the chain config:")?;
        writeln!(f, "   GENESIS_TX = \"<transaction_hex>\"")?;
        writeln!(f, "3. Rebuild the daemon and test on testnet before mainnet launch.")?;
        writeln!(f)?;
        writeln!(
            f,
            "IMPORTANT: keep the premine wallet seed phrase offline. It controls"
        )?;
        writeln!(
            f,
            "all {} {}.",
            group_digits(&policy.display_amount.to_string()),
            policy.ticker
        )?;
        writeln!(f, "{RULE}")
    }
}

/// Render the human-readable report.
pub fn render(descriptor: &AllocationDescriptor) -> String {
    Report::new(descriptor).to_string()
}

/// Render the descriptor as pretty-printed JSON for automated handoff.
pub fn render_json(descriptor: &AllocationDescriptor) -> Result<String, AllocationError> {
    serde_json::to_string_pretty(descriptor)
        .map_err(|e| AllocationError::Serialization(e.to_string()))
}
