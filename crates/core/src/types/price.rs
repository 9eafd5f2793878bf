//! Type-safe price representation using decimal arithmetic.
//!
//! Prices arrive from the catalog API as JSON numbers (e.g. `109.95`) and are
//! held as [`Decimal`] so cart arithmetic never accumulates float error.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price in US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The raw decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Scale by a rate such as a tax percentage.
    #[must_use]
    pub fn scaled(self, rate: Decimal) -> Self {
        Self(self.0 * rate)
    }

    /// Round to whole cents, half away from zero.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.rounded().0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_cents() {
        assert_eq!(Price::from_cents(1500).to_string(), "$15.00");
        assert_eq!(Price::from_cents(2299).to_string(), "$22.99");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        let price = Price::new(Decimal::new(109_945, 3));
        assert_eq!(price.to_string(), "$109.95");
    }

    #[test]
    fn test_deserializes_from_json_number() {
        let price: Price = serde_json::from_str("109.95").unwrap();
        assert_eq!(price, Price::from_cents(10_995));

        let whole: Price = serde_json::from_str("64").unwrap();
        assert_eq!(whole, Price::from_cents(6400));
    }

    #[test]
    fn test_times_and_sum() {
        let total: Price = [Price::from_cents(1050).times(2), Price::from_cents(99)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(2199));
    }

    #[test]
    fn test_scaled() {
        let tax = Price::from_cents(2000).scaled(Decimal::new(10, 2));
        assert_eq!(tax.rounded(), Price::from_cents(200));
    }
}
