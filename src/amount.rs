//! Exact decimal amount type for currency totals.
//!
//! Uses `rust_decimal` internally so running sums accumulate without
//! binary floating-point rounding error. Values keep the scale of the
//! parsed input; the two-decimal-place presentation is applied only
//! when formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// An exact decimal monetary amount.
///
/// This type wraps `rust_decimal::Decimal` and preserves the full scale of
/// the parsed input, so sums stay exact no matter how many decimal places
/// the records carry. Formatting rounds the exact value to two decimal
/// places using banker's rounding (round half to even) and always prints
/// exactly two fractional digits.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use currency_aggregator::Amount;
///
/// let amount = Amount::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.50");
///
/// let halfway = Amount::from_str("10.005").unwrap();
/// assert_eq!(halfway.to_string(), "10.00"); // half rounds to the even cent
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of decimal places shown when formatting.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates a new `Amount` from a `Decimal`, keeping its scale.
    pub fn new(value: Decimal) -> Self {
        Amount(value)
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed)?;
        Ok(Amount::new(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointNearestEven);
        write!(f, "{:.2}", rounded)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
