use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::types::amount::Amount;
use crate::types::percent::Percent;
use crate::types::tier::TierName;

/// Volume threshold that unlocks a reduced commission rate.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct VolumeTier {
    pub tier_name: TierName,
    pub minimum_monthly_volume: Amount,
    pub commission_rate_percent: Percent,
}

impl VolumeTier {
    pub fn new(tier_name: TierName, minimum_monthly_volume: i64, rate_tenths: u32) -> Self {
        VolumeTier {
            tier_name,
            minimum_monthly_volume: Amount::new(Decimal::from(minimum_monthly_volume)),
            commission_rate_percent: Percent::from_tenths(rate_tenths),
        }
    }
}

pub fn default_volume_tiers() -> Vec<VolumeTier> {
    vec![
        VolumeTier::new(TierName::Standard, 0, 50),    // 5.0%
        VolumeTier::new(TierName::Silver, 1000, 45),   // 4.5%
        VolumeTier::new(TierName::Gold, 2500, 40),     // 4.0%
        VolumeTier::new(TierName::Diamond, 5000, 35),  // 3.5%
    ]
}
