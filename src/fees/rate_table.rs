use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::config::commission::{default_commission_settings, default_rate, CommissionSetting};
use crate::error::{Error, Result};
use crate::types::listing_type::ListingType;
use crate::types::percent::Percent;

/// Where the rate applied to a fee example came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// Active commission setting for the listing type.
    ListingType,
    /// Listing type unrecognized or without an active setting.
    ListingDefault,
    /// Seller's volume tier.
    VolumeTier,
    /// Caller-supplied rate.
    Override,
}

/// Active base commission per listing type.
#[derive(Clone, Debug)]
pub struct CommissionRateTable {
    rates: BTreeMap<ListingType, Percent>,
    default_rate: Percent,
}

impl CommissionRateTable {
    /// Inactive settings are dropped. A listing type may appear at most once.
    pub fn new(settings: &[CommissionSetting], default_rate: Percent) -> Result<Self> {
        let mut seen = BTreeMap::new();
        for setting in settings {
            if seen.insert(setting.listing_type, setting).is_some() {
                return Err(Error::DuplicateCommissionSetting(setting.listing_type));
            }
        }

        let rates = seen
            .into_iter()
            .filter(|(_, setting)| setting.is_active)
            .map(|(listing_type, setting)| (listing_type, setting.commission_rate_percent))
            .collect();

        Ok(CommissionRateTable { rates, default_rate })
    }

    pub fn standard() -> Self {
        let rates = default_commission_settings()
            .into_iter()
            .map(|setting| (setting.listing_type, setting.commission_rate_percent))
            .collect();

        CommissionRateTable {
            rates,
            default_rate: default_rate(),
        }
    }

    pub fn default_rate(&self) -> Percent {
        self.default_rate
    }

    pub fn rate_for(&self, listing_type: ListingType) -> Percent {
        self.resolve(Some(listing_type)).0
    }

    /// Unrecognized keys get the default rate.
    pub fn rate_for_key(&self, key: &str) -> Percent {
        self.resolve(ListingType::from_key(key)).0
    }

    pub fn resolve(&self, listing_type: Option<ListingType>) -> (Percent, RateSource) {
        match listing_type.and_then(|lt| self.rates.get(&lt)) {
            Some(rate) => (*rate, RateSource::ListingType),
            None => (self.default_rate, RateSource::ListingDefault),
        }
    }

    pub fn is_active(&self, listing_type: ListingType) -> bool {
        self.rates.contains_key(&listing_type)
    }
}

impl Default for CommissionRateTable {
    fn default() -> Self {
        Self::standard()
    }
}
