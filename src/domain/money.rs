use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// Number of fractional digits of the currency (kuruş).
pub const MINOR_UNITS: u32 = 2;

/// Represents a currency amount.
///
/// This is a wrapper around `rust_decimal::Decimal`. Addition and subtraction
/// saturate at the `Decimal` range so that no pricing formula can panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Rounds to the nearest kuruş, midpoints away from zero, keeping exactly two decimals.
    pub fn round_minor(self) -> Self {
        let mut rounded = self
            .0
            .round_dp_with_strategy(MINOR_UNITS, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(MINOR_UNITS);
        Self(rounded)
    }

    /// Returns `self` when positive, zero otherwise.
    pub fn non_negative(self) -> Self {
        self.max(Self::ZERO)
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, m| acc + m)
    }
}

/// Formats with exactly two decimals, e.g. `1234.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_minor().0;
        write!(f, "{:.2}", rounded)
    }
}
