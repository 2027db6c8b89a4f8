use std::sync::Arc;
use crate::config::loader::AppConfig;
use crate::config::FeeScheduleConfig;
use crate::error::Result;
use crate::fees::promotions::PromotionCatalog;
use crate::fees::rate_table::CommissionRateTable;
use crate::fees::volume_tier::VolumeIncentiveResolver;

/// Immutable, validated snapshot of everything the fee pipeline reads.
/// Built once per session and shared behind an `Arc`.
#[derive(Clone, Debug, Default)]
pub struct FeeSchedule {
    rate_table: CommissionRateTable,
    volume_tiers: VolumeIncentiveResolver,
    promotions: PromotionCatalog,
}

impl FeeSchedule {
    pub fn new(
        rate_table: CommissionRateTable,
        volume_tiers: VolumeIncentiveResolver,
        promotions: PromotionCatalog,
    ) -> Self {
        FeeSchedule { rate_table, volume_tiers, promotions }
    }

    pub fn standard() -> Self {
        FeeSchedule::new(
            CommissionRateTable::standard(),
            VolumeIncentiveResolver::standard(),
            PromotionCatalog::standard(),
        )
    }

    pub fn from_config(config: &FeeScheduleConfig) -> Result<Self> {
        let rate_table = CommissionRateTable::new(
            &config.commission_settings,
            config.default_rate_percent,
        )?;
        let volume_tiers = VolumeIncentiveResolver::new(config.volume_tiers.clone())?;
        let promotions = PromotionCatalog::new(config.promotions.clone())?;

        Ok(FeeSchedule::new(rate_table, volume_tiers, promotions))
    }

    /// Fetch configuration for `env` and freeze it into a shared snapshot.
    pub fn load(env: &str) -> Result<Arc<Self>> {
        let config = AppConfig::load(env)?;
        let schedule = Self::from_config(&config.fees)?;

        tracing::info!(
            env = %env,
            commission_settings = config.fees.commission_settings.len(),
            volume_tiers = schedule.volume_tiers.tiers().len(),
            promotions = schedule.promotions.promotions().len(),
            "Fee schedule loaded"
        );

        Ok(Arc::new(schedule))
    }

    pub fn rate_table(&self) -> &CommissionRateTable {
        &self.rate_table
    }

    pub fn volume_tiers(&self) -> &VolumeIncentiveResolver {
        &self.volume_tiers
    }

    pub fn promotions(&self) -> &PromotionCatalog {
        &self.promotions
    }
}
