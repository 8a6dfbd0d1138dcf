//! Allocation policy: how much to premine and at what precision.

use crate::amount::{AmountWidth, DisplayAmount};
use serde::{Deserialize, Serialize};

/// Nominal premine in whole coins.
pub const PREMINE_DISPLAY_AMOUNT: i128 = 3_000_000_000;

/// Fractional digits of the base unit (1 coin = 10^12 atomic units).
pub const DECIMAL_PRECISION: i32 = 12;

/// Ticker printed next to display amounts.
pub const TICKER: &str = "OXRX";

/// Immutable description of a premine allocation.
///
/// Passed explicitly to the builder on every call. The builder, not the
/// constructor, enforces `display_amount >= 0` and `decimal_precision >= 0`,
/// so a policy deserialized from elsewhere is checked the same way.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AllocationPolicy {
    /// Nominal coin quantity to allocate.
    pub display_amount: DisplayAmount,

    /// Number of fractional digits the base unit supports.
    pub decimal_precision: i32,

    /// Width of the on-chain amount field the result must fit in.
    #[serde(default)]
    pub amount_width: AmountWidth,

    /// Currency symbol, display only.
    #[serde(default = "default_ticker")]
    pub ticker: String,
}

fn default_ticker() -> String {
    TICKER.to_string()
}

impl AllocationPolicy {
    /// Oxyra mainnet premine: 3,000,000,000 OXRX at 12 decimals.
    pub fn premine_defaults() -> Self {
        Self {
            display_amount: DisplayAmount::whole(PREMINE_DISPLAY_AMOUNT),
            decimal_precision: DECIMAL_PRECISION,
            amount_width: AmountWidth::U128,
            ticker: default_ticker(),
        }
    }

    pub fn new(display_amount: DisplayAmount, decimal_precision: i32) -> Self {
        Self {
            display_amount,
            decimal_precision,
            ..Self::premine_defaults()
        }
    }

    pub fn with_amount_width(mut self, width: AmountWidth) -> Self {
        self.amount_width = width;
        self
    }

    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = ticker.into();
        self
    }
}

/// Default is the mainnet premine.
impl Default for AllocationPolicy {
    fn default() -> Self {
        Self::premine_defaults()
    }
}
