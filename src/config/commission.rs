use serde::{Deserialize, Serialize};
use crate::types::listing_type::ListingType;
use crate::types::percent::Percent;

/// Administrator-defined base commission for one listing type.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CommissionSetting {
    pub listing_type: ListingType,
    pub commission_rate_percent: Percent,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl CommissionSetting {
    pub fn new(listing_type: ListingType, commission_rate_percent: Percent) -> Self {
        CommissionSetting {
            listing_type,
            commission_rate_percent,
            is_active: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Rate used when a listing type has no active setting.
pub fn default_rate() -> Percent {
    Percent::from_tenths(50) // 5.0%
}

pub fn default_commission_settings() -> Vec<CommissionSetting> {
    ListingType::ALL
        .iter()
        .map(|listing_type| CommissionSetting::new(*listing_type, default_rate()))
        .collect()
}
