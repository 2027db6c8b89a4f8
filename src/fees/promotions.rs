use std::collections::HashSet;
use crate::config::promotions::{default_promotions, PromotionPrice};
use crate::error::{Error, Result};
use crate::fees::calculator::FeeExample;
use crate::types::amount::Amount;

/// Price list for paid listing upgrades.
#[derive(Clone, Debug)]
pub struct PromotionCatalog {
    prices: Vec<PromotionPrice>,
}

impl PromotionCatalog {
    pub fn new(prices: Vec<PromotionPrice>) -> Result<Self> {
        let mut names = HashSet::new();
        for promotion in &prices {
            if promotion.name.trim().is_empty() {
                return Err(Error::InvalidPromotion {
                    name: promotion.name.clone(),
                    reason: "empty name".to_string(),
                });
            }
            if promotion.duration_days == 0 {
                return Err(Error::InvalidPromotion {
                    name: promotion.name.clone(),
                    reason: "duration must be at least one day".to_string(),
                });
            }
            if !names.insert(promotion.name.as_str()) {
                return Err(Error::InvalidPromotion {
                    name: promotion.name.clone(),
                    reason: "listed twice".to_string(),
                });
            }
        }

        Ok(PromotionCatalog { prices })
    }

    pub fn standard() -> Self {
        PromotionCatalog {
            prices: default_promotions(),
        }
    }

    pub fn promotions(&self) -> &[PromotionPrice] {
        &self.prices
    }

    pub fn promotion_price(&self, name: &str) -> Option<&PromotionPrice> {
        self.prices.iter().find(|promotion| promotion.name == name)
    }

    /// What the seller pays the platform: commission plus each selected
    /// promotion. Unknown promotion names are skipped.
    pub fn listing_cost(&self, fee: &FeeExample, selected: &[&str]) -> Amount {
        selected.iter().fold(fee.commission_amount, |total, name| {
            match self.promotion_price(name) {
                Some(promotion) => total + promotion.price,
                None => {
                    tracing::warn!(promotion = %name, "Unknown promotion skipped");
                    total
                }
            }
        })
    }
}

impl Default for PromotionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use rust_decimal_macros::dec;
    use crate::fees::calculator::FeeCalculator;
    use crate::fees::schedule::FeeSchedule;
    use crate::types::listing_type::ListingType;

    #[test]
    fn looks_up_prices_by_name() {
        let catalog = PromotionCatalog::standard();
        let featured = catalog.promotion_price("featured").unwrap();
        assert_eq!(featured.price.value(), dec!(4.99));
        assert_eq!(featured.duration_days, 7);
        assert!(catalog.promotion_price("billboard").is_none());
    }

    #[test]
    fn listing_cost_adds_known_promotions() {
        let calculator = FeeCalculator::new(Arc::new(FeeSchedule::standard()));
        let fee = calculator.compute_fee(Amount::new(dec!(100)), Some(ListingType::BuyItNow), None);
        let catalog = PromotionCatalog::standard();

        let cost = catalog.listing_cost(&fee, &["featured", "highlight", "billboard"]);
        assert_eq!(cost.value(), dec!(11.98));
        assert_eq!(catalog.listing_cost(&fee, &[]), fee.commission_amount);
    }

    #[test]
    fn rejects_bad_entries() {
        let zero_days = vec![PromotionPrice::new("featured", 499, 0)];
        assert!(matches!(PromotionCatalog::new(zero_days), Err(Error::InvalidPromotion { .. })));

        let duplicate = vec![
            PromotionPrice::new("featured", 499, 7),
            PromotionPrice::new("featured", 599, 14),
        ];
        assert!(matches!(PromotionCatalog::new(duplicate), Err(Error::InvalidPromotion { .. })));

        let blank = vec![PromotionPrice::new(" ", 100, 7)];
        assert!(PromotionCatalog::new(blank).is_err());
    }
}
