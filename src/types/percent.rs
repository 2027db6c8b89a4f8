use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::error::{Error, Result};
use crate::types::amount::Amount;

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Commission percentage, always within `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Percent(Decimal);

impl Percent {
    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO || value > ONE_HUNDRED {
            return Err(Error::RateOutOfRange(value));
        }
        Ok(Percent(value.normalize()))
    }

    /// Percent expressed in tenths, e.g. `from_tenths(45)` is 4.5%.
    pub fn from_tenths(tenths: u32) -> Self {
        Percent(Decimal::new(tenths.min(1000) as i64, 1).normalize())
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Rate as a fraction of one, e.g. 5% -> 0.05.
    pub fn fraction(&self) -> Decimal {
        self.0 / ONE_HUNDRED
    }

    /// Exact share of `amount`, unrounded. Never exceeds `amount`.
    pub fn of(&self, amount: Amount) -> Decimal {
        amount.value() * self.fraction()
    }
}

impl TryFrom<Decimal> for Percent {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self> {
        Percent::new(value)
    }
}

impl From<Percent> for Decimal {
    fn from(percent: Percent) -> Self {
        percent.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
