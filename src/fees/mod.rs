pub mod rate_table;
pub mod volume_tier;
pub mod calculator;
pub mod promotions;
pub mod schedule;

pub use calculator::{FeeCalculator, FeeExample};
pub use rate_table::{CommissionRateTable, RateSource};
pub use schedule::FeeSchedule;
pub use volume_tier::{TierProgress, VolumeIncentiveResolver};
