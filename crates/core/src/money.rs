//! Prices in whole Indonesian Rupiah.
//!
//! The storefront never deals in fractional amounts: every price is an integer
//! number of Rupiah and is only turned into text at presentation time.

use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

/// An amount of money in whole Rupiah.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn new(rupiah: u64) -> Self {
        Self(rupiah)
    }

    pub const fn rupiah(self) -> u64 {
        self.0
    }

    /// Price of `quantity` units. Saturates instead of wrapping.
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }

    /// `percent`% of this amount, rounded half up to the nearest Rupiah.
    pub const fn percent(self, percent: u64) -> Self {
        let scaled = self.0.saturating_mul(percent);
        Self(scaled / 100 + if scaled % 100 >= 50 { 1 } else { 0 })
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl From<u64> for Money {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(&format_rupiah(self.0))
    }
}

/// Format a whole-Rupiah amount the way the `id-ID` locale does: `.` as the
/// thousands separator and no decimal digits.
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {grouped}")
}
