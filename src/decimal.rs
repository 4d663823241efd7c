use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// money in the smallest currency unit (cents)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);
    /// the smallest positive amount
    pub const ONE: Money = Money(1);

    /// create from minor amount (cents)
    pub const fn from_minor(amount: i64) -> Self {
        Money(amount)
    }

    /// create from a major amount (dollars) with `scale` minor digits.
    /// returns None if the amount has more precision than `scale` allows
    /// or does not fit.
    pub fn from_major(amount: Decimal, scale: u32) -> Option<Self> {
        let factor = Decimal::from(10_i64.checked_pow(scale)?);
        let minor = amount.checked_mul(factor)?;
        if !minor.fract().is_zero() {
            return None;
        }
        minor.to_i64().map(Money)
    }

    /// amount in minor units
    pub const fn as_minor(&self) -> i64 {
        self.0
    }

    /// amount in major units with `scale` minor digits, at most 28
    pub fn to_major(&self, scale: u32) -> Decimal {
        Decimal::new(self.0, scale)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// as a float, for rate arithmetic
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

/// round-half-up from a float to minor units.
///
/// every float -> money conversion goes through here so the payment solver
/// and the schedule generator agree to the cent. values are truncated toward
/// zero after adding one half; out of range values saturate.
pub fn round_half_up(x: f64) -> Money {
    Money((x + 0.5) as i64)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Money {
    fn from(minor: i64) -> Self {
        Money::from_minor(minor)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 -= other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, x| acc + x)
    }
}

/// annual interest rate as a fraction (0.04 = 4%)
///
/// amortization math runs in binary floating point, so the rate is kept as
/// an f64. decimal inputs are converted once on the way in.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Rate(f64);

impl Rate {
    pub const ZERO: Rate = Rate(0.0);

    /// create from a fraction (e.g., 0.05 for 5%)
    pub const fn from_fraction(f: f64) -> Self {
        Rate(f)
    }

    /// create from decimal fraction (e.g., dec!(0.05) for 5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d.to_f64().unwrap_or(f64::NAN))
    }

    /// create from whole percentage (e.g., 5 for 5%)
    pub fn from_percentage(p: i32) -> Self {
        Rate(p as f64 / 100.0)
    }

    /// create from decimal percentage (e.g., dec!(4.5) for 4.5%)
    pub fn from_decimal_percentage(p: Decimal) -> Self {
        match p.checked_div(dec!(100)) {
            Some(d) => Rate::from_decimal(d),
            None => Rate(f64::NAN),
        }
    }

    /// create from basis points (e.g., 500 for 5%)
    pub fn from_bps(bps: i32) -> Self {
        Rate(bps as f64 / 10_000.0)
    }

    /// get as fraction
    pub fn as_f64(&self) -> f64 {
        self.0
    }

    /// get as percentage
    pub fn as_percentage(&self) -> f64 {
        self.0 * 100.0
    }

    /// monthly rate from annual rate
    pub fn monthly_rate(&self) -> f64 {
        self.0 / 12.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}
