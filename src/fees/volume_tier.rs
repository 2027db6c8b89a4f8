use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::config::tiers::{default_volume_tiers, VolumeTier};
use crate::error::{Error, Result};
use crate::types::amount::Amount;
use crate::types::tier::TierName;

/// Distance from a seller's current volume to the next tier up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierProgress {
    pub current: TierName,
    pub next: VolumeTier,
    pub remaining_volume: Amount,
}

/// Maps trailing monthly sales volume to a commission tier.
#[derive(Clone, Debug)]
pub struct VolumeIncentiveResolver {
    tiers: Vec<VolumeTier>,  // ascending by minimum_monthly_volume
}

impl VolumeIncentiveResolver {
    /// Tiers must start at 0, rise strictly in threshold, and never raise the rate.
    pub fn new(tiers: Vec<VolumeTier>) -> Result<Self> {
        let base = tiers.first().ok_or(Error::EmptyTierSchedule)?;
        if !base.minimum_monthly_volume.is_zero() {
            return Err(Error::TierScheduleMissingBase {
                tier: base.tier_name,
                minimum: base.minimum_monthly_volume.value(),
            });
        }

        for pair in tiers.windows(2) {
            let (previous, tier) = (&pair[0], &pair[1]);
            if tier.minimum_monthly_volume <= previous.minimum_monthly_volume {
                return Err(Error::TierScheduleUnordered {
                    previous: previous.tier_name,
                    previous_minimum: previous.minimum_monthly_volume.value(),
                    tier: tier.tier_name,
                    minimum: tier.minimum_monthly_volume.value(),
                });
            }
            if tier.commission_rate_percent > previous.commission_rate_percent {
                return Err(Error::TierRateIncreases {
                    tier: tier.tier_name,
                    rate: tier.commission_rate_percent.value(),
                    previous_rate: previous.commission_rate_percent.value(),
                });
            }
        }

        Ok(VolumeIncentiveResolver { tiers })
    }

    pub fn standard() -> Self {
        VolumeIncentiveResolver {
            tiers: default_volume_tiers(),
        }
    }

    pub fn tiers(&self) -> &[VolumeTier] {
        &self.tiers
    }

    /// Highest tier whose threshold `monthly_volume` meets. Negative volume
    /// counts as zero.
    pub fn tier_for(&self, monthly_volume: Decimal) -> &VolumeTier {
        let index = self.position(monthly_volume);
        &self.tiers[index]
    }

    /// `None` once the seller sits in the top tier.
    pub fn next_tier(&self, monthly_volume: Decimal) -> Option<TierProgress> {
        let volume = Amount::new(monthly_volume);
        let index = self.position(monthly_volume);
        let next = self.tiers.get(index + 1)?;

        Some(TierProgress {
            current: self.tiers[index].tier_name,
            next: next.clone(),
            remaining_volume: next.minimum_monthly_volume - volume,
        })
    }

    fn position(&self, monthly_volume: Decimal) -> usize {
        let volume = Amount::new(monthly_volume);
        // Base tier starts at 0, so at least one tier always matches.
        self.tiers
            .partition_point(|tier| tier.minimum_monthly_volume <= volume)
            .saturating_sub(1)
    }
}

impl Default for VolumeIncentiveResolver {
    fn default() -> Self {
        Self::standard()
    }
}
