//! Amount types for premine allocation.
//!
//! Display amounts are exact decimals; atomic amounts are fixed-point integers
//! (u128) to avoid floating-point errors. The smallest unit is 1 atomic unit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AllocationError;

/// Width of the integer field a ledger uses for on-chain amounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountWidth {
    /// 64-bit unsigned, as used by CryptoNote-style `tx_out.amount`.
    U64,
    /// 128-bit unsigned.
    #[default]
    U128,
}

impl AmountWidth {
    /// Largest atomic amount representable at this width.
    pub fn max_value(&self) -> u128 {
        match self {
            Self::U64 => u64::MAX as u128,
            Self::U128 => u128::MAX,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::U64 => "u64",
            Self::U128 => "u128",
        }
    }
}

impl fmt::Display for AmountWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AmountWidth {
    type Err = AllocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u64" | "64" => Ok(Self::U64),
            "u128" | "128" => Ok(Self::U128),
            other => Err(AllocationError::InvalidAmount(format!(
                "unknown amount width {other:?} (expected u64 or u128)"
            ))),
        }
    }
}

/// A nominal coin quantity as an operator writes it, e.g. `3,000,000,000`.
///
/// Stored as `mantissa / 10^scale` with trailing fractional zeros stripped,
/// so `1.50` and `1.5` compare equal. Negative values are representable so
/// that policy validation can reject them explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayAmount {
    mantissa: i128,
    scale: u32,
}

impl DisplayAmount {
    pub const ZERO: Self = Self {
        mantissa: 0,
        scale: 0,
    };

    /// Build `mantissa / 10^scale`, normalising trailing zeros away.
    pub fn new(mut mantissa: i128, mut scale: u32) -> Self {
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        if mantissa == 0 {
            scale = 0;
        }
        Self { mantissa, scale }
    }

    /// A whole number of coins.
    pub const fn whole(units: i128) -> Self {
        Self {
            mantissa: units,
            scale: 0,
        }
    }

    pub fn mantissa(&self) -> i128 {
        self.mantissa
    }

    /// Number of fractional digits.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa < 0
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    /// Exact `self × 10^precision` as an unsigned integer.
    ///
    /// Returns `None` when the amount is negative, has more fractional digits
    /// than `precision`, or the product does not fit in a u128.
    pub fn to_atomic_units(&self, precision: u32) -> Option<u128> {
        let magnitude = u128::try_from(self.mantissa).ok()?;
        let shift = precision.checked_sub(self.scale)?;
        if magnitude == 0 {
            return Some(0);
        }
        10u128
            .checked_pow(shift)
            .and_then(|factor| magnitude.checked_mul(factor))
    }
}

impl Default for DisplayAmount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for DisplayAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let digits = self.mantissa.unsigned_abs().to_string();
        let scale = self.scale as usize;
        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (int, frac) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{int}.{frac}")
    }
}

impl FromStr for DisplayAmount {
    type Err = AllocationError;

    /// Accepts an optional sign, an integer part optionally grouped in
    /// threes with `,` or `_`, and an optional fractional part:
    /// `3,000,000,000`, `-1`, `0.000001`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |why: &str| AllocationError::InvalidAmount(format!("{s:?}: {why}"));

        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (int_part, frac_part) = match body.split_once('.') {
            Some((int, frac)) => (int, Some(frac)),
            None => (body, None),
        };

        let int_digits = ungroup(int_part).map_err(invalid)?;
        if int_digits.is_empty() {
            return Err(invalid("missing integer digits"));
        }
        let frac_digits = frac_part.unwrap_or_default();
        if frac_part.is_some() && frac_digits.is_empty() {
            return Err(invalid("missing fractional digits"));
        }

        // Negative values accumulate downward so i128::MIN stays reachable.
        let mut mantissa: i128 = 0;
        for c in int_digits.chars().chain(frac_digits.chars()) {
            let digit = c
                .to_digit(10)
                .ok_or_else(|| invalid("unexpected character"))?;
            mantissa =
                push_digit(mantissa, digit, negative).ok_or_else(|| invalid("too many digits"))?;
        }
        let scale = u32::try_from(frac_digits.len()).map_err(|_| invalid("too many digits"))?;
        Ok(Self::new(mantissa, scale))
    }
}

/// Strip `,` or `_` group separators from an integer part.
///
/// When separators are present the leading group has one to three
/// characters and every later group exactly three.
fn ungroup(int_part: &str) -> Result<String, &'static str> {
    let sep = match (int_part.contains(','), int_part.contains('_')) {
        (true, true) => return Err("mixed group separators"),
        (true, false) => ',',
        (false, true) => '_',
        (false, false) => return Ok(int_part.to_string()),
    };
    let mut groups = int_part.split(sep);
    let first = groups.next().unwrap_or_default();
    if first.is_empty() || first.len() > 3 {
        return Err("misplaced group separator");
    }
    let mut digits = first.to_string();
    for group in groups {
        if group.len() != 3 {
            return Err("digit groups must be three digits long");
        }
        digits.push_str(group);
    }
    Ok(digits)
}

fn push_digit(acc: i128, digit: u32, negative: bool) -> Option<i128> {
    let shifted = acc.checked_mul(10)?;
    let digit = i128::from(digit);
    if negative {
        shifted.checked_sub(digit)
    } else {
        shifted.checked_add(digit)
    }
}

impl TryFrom<String> for DisplayAmount {
    type Error = AllocationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DisplayAmount> for String {
    fn from(amount: DisplayAmount) -> Self {
        amount.to_string()
    }
}

/// An exact quantity of atomic units.
///
/// Serialized as a decimal string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AtomicAmount(u128);

impl AtomicAmount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Whether this amount can be stored in an on-chain field of `width`.
    pub fn fits(&self, width: AmountWidth) -> bool {
        self.0 <= width.max_value()
    }

    /// Canonical encoding: lowercase hex, no `0x`, no leading zeros.
    pub fn to_hex(&self) -> String {
        format!("{:x}", self.0)
    }

    /// Parse the canonical hex encoding produced by [`AtomicAmount::to_hex`].
    ///
    /// Non-canonical input (prefix, uppercase, leading zeros) is rejected.
    pub fn from_hex(s: &str) -> Result<Self, AllocationError> {
        let invalid = |why: &str| AllocationError::InvalidAmount(format!("hex {s:?}: {why}"));
        if s.is_empty() {
            return Err(invalid("empty"));
        }
        if !s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(invalid("expected lowercase hex digits only"));
        }
        if s.len() > 1 && s.starts_with('0') {
            return Err(invalid("leading zeros"));
        }
        u128::from_str_radix(s, 16)
            .map(Self)
            .map_err(|_| invalid("exceeds 128 bits"))
    }
}

impl fmt::Display for AtomicAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AtomicAmount {
    type Err = AllocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AllocationError::InvalidAmount(format!(
                "{s:?}: expected decimal digits"
            )));
        }
        s.parse::<u128>()
            .map(Self)
            .map_err(|_| AllocationError::InvalidAmount(format!("{s:?}: exceeds 128 bits")))
    }
}

impl TryFrom<String> for AtomicAmount {
    type Error = AllocationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AtomicAmount> for String {
    fn from(amount: AtomicAmount) -> Self {
        amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_grouped_whole_amount() {
        let amount: DisplayAmount = "3,000,000,000".parse().unwrap();
        assert_eq!(amount, DisplayAmount::whole(3_000_000_000));
        assert_eq!("3_000_000_000".parse::<DisplayAmount>().unwrap(), amount);
    }

    #[test]
    fn parse_fraction_normalises_trailing_zeros() {
        let a: DisplayAmount = "1.50".parse().unwrap();
        let b: DisplayAmount = "1.5".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.scale(), 1);
        assert_eq!(a.mantissa(), 15);
        assert_eq!(a.to_string(), "1.5");
    }

    #[test]
    fn parse_negative() {
        let amount: DisplayAmount = "-1".parse().unwrap();
        assert!(amount.is_negative());
        assert_eq!(amount.to_string(), "-1");
    }

    #[test]
    fn parse_i128_min_roundtrips() {
        let min = DisplayAmount::whole(i128::MIN);
        assert_eq!(min.to_string().parse::<DisplayAmount>().unwrap(), min);
        let json = serde_json::to_string(&min).unwrap();
        assert_eq!(serde_json::from_str::<DisplayAmount>(&json).unwrap(), min);
        assert!("-170141183460469231731687303715884105729"
            .parse::<DisplayAmount>()
            .is_err());
    }

    #[test]
    fn parse_rejects_malformed_grouping() {
        for bad in [",5", "1,,2", "1,2", "1,0000", "1234,567", "1,000,", "_1", "1_000,000"] {
            assert!(bad.parse::<DisplayAmount>().is_err(), "accepted {bad:?}");
        }
        assert_eq!(
            "12,345.5".parse::<DisplayAmount>().unwrap(),
            DisplayAmount::new(123455, 1)
        );
        assert!("1.000_5".parse::<DisplayAmount>().is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "-", ".5", "5.", "1.2.3", "abc", "1e9", "0x10"] {
            assert!(bad.parse::<DisplayAmount>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn parse_rejects_more_digits_than_i128() {
        let too_long = "9".repeat(40);
        assert!(matches!(
            too_long.parse::<DisplayAmount>(),
            Err(AllocationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn display_small_fraction() {
        assert_eq!(DisplayAmount::new(1, 6).to_string(), "0.000001");
        assert_eq!(DisplayAmount::new(-25, 2).to_string(), "-0.25");
    }

    #[test]
    fn atomic_units_exact() {
        let premine = DisplayAmount::whole(3_000_000_000);
        assert_eq!(
            premine.to_atomic_units(12),
            Some(3_000_000_000_000_000_000_000)
        );
        assert_eq!(DisplayAmount::new(15, 1).to_atomic_units(12), Some(1_500_000_000_000));
    }

    #[test]
    fn atomic_units_refuses_lossy_or_negative() {
        assert_eq!(DisplayAmount::new(125, 2).to_atomic_units(1), None);
        assert_eq!(DisplayAmount::whole(-1).to_atomic_units(12), None);
        assert_eq!(DisplayAmount::whole(i128::MAX).to_atomic_units(2), None);
    }

    #[test]
    fn zero_scales_at_any_precision() {
        assert_eq!(DisplayAmount::ZERO.to_atomic_units(200), Some(0));
    }

    #[test]
    fn hex_is_lowercase_without_prefix() {
        let amount = AtomicAmount::new(3_000_000_000_000_000_000_000);
        assert_eq!(amount.to_hex(), "a2a15d09519be00000");
        assert_eq!(AtomicAmount::ZERO.to_hex(), "0");
    }

    #[test]
    fn from_hex_rejects_non_canonical() {
        assert!(AtomicAmount::from_hex("0xff").is_err());
        assert!(AtomicAmount::from_hex("FF").is_err());
        assert!(AtomicAmount::from_hex("0ff").is_err());
        assert!(AtomicAmount::from_hex("").is_err());
        assert_eq!(AtomicAmount::from_hex("0").unwrap(), AtomicAmount::ZERO);
    }

    #[test]
    fn width_limits() {
        let over = AtomicAmount::new(u64::MAX as u128 + 1);
        assert!(!over.fits(AmountWidth::U64));
        assert!(over.fits(AmountWidth::U128));
        assert_eq!("64".parse::<AmountWidth>().unwrap(), AmountWidth::U64);
        assert!("u32".parse::<AmountWidth>().is_err());
    }

    #[test]
    fn atomic_amount_serializes_as_decimal_string() {
        let amount = AtomicAmount::new(3_000_000_000_000_000_000_000);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"3000000000000000000000\"");
        assert_eq!(serde_json::from_str::<AtomicAmount>(&json).unwrap(), amount);
        assert!(serde_json::from_str::<AtomicAmount>("\"-5\"").is_err());
    }

    #[test]
    fn display_amount_serializes_as_string() {
        let json = serde_json::to_string(&DisplayAmount::new(15, 1)).unwrap();
        assert_eq!(json, "\"1.5\"");
        let back: DisplayAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DisplayAmount::new(15, 1));
    }
}
