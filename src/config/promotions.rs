use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::types::amount::Amount;

/// Paid listing upgrade from the promotion price list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PromotionPrice {
    pub name: String,
    pub price: Amount,
    pub duration_days: u32,
}

impl PromotionPrice {
    pub fn new(name: &str, price_cents: i64, duration_days: u32) -> Self {
        PromotionPrice {
            name: name.to_string(),
            price: Amount::new(Decimal::new(price_cents, 2)),
            duration_days,
        }
    }
}

pub fn default_promotions() -> Vec<PromotionPrice> {
    vec![
        PromotionPrice::new("featured", 499, 7),
        PromotionPrice::new("highlight", 199, 7),
        PromotionPrice::new("top_of_category", 999, 30),
    ]
}
