use serde::{Deserialize, Serialize};
use crate::config::commission::{default_commission_settings, default_rate, CommissionSetting};
use crate::config::promotions::{default_promotions, PromotionPrice};
use crate::config::tiers::{default_volume_tiers, VolumeTier};
use crate::types::percent::Percent;

pub mod commission;
pub mod tiers;
pub mod promotions;
pub mod loader;

/// Raw fee configuration as supplied by the administrator. Validated into a
/// `FeeSchedule` before use.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FeeScheduleConfig {
    #[serde(default = "default_rate")]
    pub default_rate_percent: Percent,
    #[serde(default = "default_commission_settings")]
    pub commission_settings: Vec<CommissionSetting>,
    #[serde(default = "default_volume_tiers")]
    pub volume_tiers: Vec<VolumeTier>,
    #[serde(default = "default_promotions")]
    pub promotions: Vec<PromotionPrice>,
}

impl Default for FeeScheduleConfig {
    fn default() -> Self {
        FeeScheduleConfig {
            default_rate_percent: default_rate(),
            commission_settings: default_commission_settings(),
            volume_tiers: default_volume_tiers(),
            promotions: default_promotions(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            json: false,
        }
    }
}
