use std::sync::Arc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::fees::rate_table::RateSource;
use crate::fees::schedule::FeeSchedule;
use crate::types::amount::Amount;
use crate::types::listing_type::ListingType;
use crate::types::percent::Percent;
use crate::types::tier::TierName;

/// Commission breakdown for one hypothetical sale, ready for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeExample {
    pub sale_amount: Amount,
    pub listing_type: Option<ListingType>,
    pub commission_rate_percent: Percent,
    pub rate_source: RateSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_tier: Option<TierName>,
    pub commission_amount: Amount,
    pub net_earnings: Amount,
}

pub struct FeeCalculator {
    schedule: Arc<FeeSchedule>,
}

impl FeeCalculator {
    pub fn new(schedule: Arc<FeeSchedule>) -> Self {
        FeeCalculator { schedule }
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// An explicit `rate_override` wins over the listing type's rate; an
    /// unrecognized listing type (`None`) gets the default rate.
    pub fn compute_fee(
        &self,
        sale_amount: Amount,
        listing_type: Option<ListingType>,
        rate_override: Option<Percent>,
    ) -> FeeExample {
        let (rate, source) = match rate_override {
            Some(rate) => (rate, RateSource::Override),
            None => self.schedule.rate_table().resolve(listing_type),
        };

        Self::build(sale_amount, listing_type, rate, source, None)
    }

    /// Uses the seller's volume tier rate in place of the listing type's rate.
    pub fn compute_fee_for_volume(
        &self,
        sale_amount: Amount,
        listing_type: Option<ListingType>,
        monthly_volume: Decimal,
    ) -> FeeExample {
        let tier = self.schedule.volume_tiers().tier_for(monthly_volume);

        Self::build(
            sale_amount,
            listing_type,
            tier.commission_rate_percent,
            RateSource::VolumeTier,
            Some(tier.tier_name),
        )
    }

    /// One example per (amount, listing type) pair, amounts outermost.
    pub fn fee_table(&self, amounts: &[Amount], listing_types: &[ListingType]) -> Vec<FeeExample> {
        amounts
            .iter()
            .flat_map(|amount| {
                listing_types
                    .iter()
                    .map(move |listing_type| self.compute_fee(*amount, Some(*listing_type), None))
            })
            .collect()
    }

    /// Split a sale into (commission, net earnings), both in cents. The
    /// commission is rounded once from the exact share and net is whatever
    /// the sale leaves after it. For whole-cent sales the two sum to the sale.
    pub fn split(sale_amount: Amount, rate: Percent) -> (Amount, Amount) {
        let commission = Amount::new(rate.of(sale_amount)).round_for_display();
        let net = (sale_amount - commission).round_for_display();

        (commission, net)
    }

    fn build(
        sale_amount: Amount,
        listing_type: Option<ListingType>,
        rate: Percent,
        rate_source: RateSource,
        volume_tier: Option<TierName>,
    ) -> FeeExample {
        let (commission_amount, net_earnings) = Self::split(sale_amount, rate);

        FeeExample {
            sale_amount,
            listing_type,
            commission_rate_percent: rate,
            rate_source,
            volume_tier,
            commission_amount,
            net_earnings,
        }
    }
}
