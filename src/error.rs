use rust_decimal::Decimal;
use thiserror::Error;
use crate::types::listing_type::ListingType;
use crate::types::tier::TierName;

#[derive(Error, Debug)]
pub enum Error {
    // Input Errors
    #[error("Unknown listing type: {0:?}")]
    UnknownListingType(String),

    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Commission rate out of range: {0} (expected 0-100)")]
    RateOutOfRange(Decimal),

    // Schedule Errors
    #[error("Duplicate commission setting for {0}")]
    DuplicateCommissionSetting(ListingType),

    #[error("Volume tier schedule is empty")]
    EmptyTierSchedule,

    #[error("Lowest volume tier {tier} starts at {minimum}, expected 0")]
    TierScheduleMissingBase {
        tier: TierName,
        minimum: Decimal,
    },

    #[error("Volume tiers out of order: {previous} ({previous_minimum}) before {tier} ({minimum})")]
    TierScheduleUnordered {
        previous: TierName,
        previous_minimum: Decimal,
        tier: TierName,
        minimum: Decimal,
    },

    #[error("Volume tier {tier} raises the rate: {rate}% above {previous_rate}%")]
    TierRateIncreases {
        tier: TierName,
        rate: Decimal,
        previous_rate: Decimal,
    },

    #[error("Invalid promotion {name:?}: {reason}")]
    InvalidPromotion {
        name: String,
        reason: String,
    },

    // Configuration Errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Metrics error: {0}")]
    MetricsError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
