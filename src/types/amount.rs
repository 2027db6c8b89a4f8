use num_traits::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;
use crate::error::{Error, Result};

/// Decimal places shown for money in fee examples.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Largest amount accepted (10^18). Keeps cent arithmetic exact inside the
/// 96-bit decimal mantissa.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA764_0000, 0x0DE0_B6B3, 0, false, 0);

/// USD amount in `[0, MAX_AMOUNT]` backed by an exact decimal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Out-of-range values clamp to `[0, MAX_AMOUNT]`.
    pub fn new(value: Decimal) -> Self {
        Amount(value.clamp(Decimal::ZERO, MAX_AMOUNT))
    }

    /// NaN, infinities and values outside the decimal range become zero.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Amount::zero();
        }
        Decimal::from_f64(value).map(Amount::new).unwrap_or_default()
    }

    /// Strict parse of user-entered text such as `"250"`, `"$1,250.50"`.
    pub fn parse(input: &str) -> Result<Self> {
        let value = parse_decimal(input)?;
        if value.is_sign_negative() && !value.is_zero() {
            return Err(Error::InvalidAmount(input.to_string()));
        }

        Ok(Amount::new(value))
    }

    pub fn zero() -> Self {
        Amount(Decimal::ZERO)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn clamp(self, min: Amount, max: Amount) -> Self {
        Amount(self.0.clamp(min.0, max.0))
    }

    /// Round half away from zero to cents.
    pub fn round_for_display(&self) -> Self {
        Amount(round_cents(self.0))
    }
}

/// Signed decimal from user-entered text. Accepts a leading `$`, `,` and `_`
/// digit separators, and scientific notation.
pub fn parse_decimal(input: &str) -> Result<Decimal> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();

    if cleaned.is_empty() {
        return Err(Error::InvalidAmount(input.to_string()));
    }

    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| Error::InvalidAmount(input.to_string()))
}

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Amount::parse(s)
    }
}

impl Add for Amount {
    type Output = Amount;
    fn add(self, other: Amount) -> Amount {
        Amount::new(self.0 + other.0)
    }
}

impl Sub for Amount {
    type Output = Amount;
    /// Saturates at zero.
    fn sub(self, other: Amount) -> Amount {
        Amount::new(self.0 - other.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", round_cents(self.0))
    }
}
