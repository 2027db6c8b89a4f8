use std::sync::Arc;
use market_fees::fees::volume_tier::VolumeIncentiveResolver;
use market_fees::fees::{CommissionRateTable, FeeCalculator, RateSource};
use market_fees::types::amount::MAX_AMOUNT;
use market_fees::types::{Amount, ListingType, Percent, TierName};
use market_fees::{FeeQuoteService, FeeSchedule, QuoteRequest};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn calculator() -> FeeCalculator {
    FeeCalculator::new(Arc::new(FeeSchedule::standard()))
}

fn listing_type() -> impl Strategy<Value = ListingType> {
    prop_oneof![
        Just(ListingType::BuyItNow),
        Just(ListingType::MakeOffer),
        Just(ListingType::Classified),
    ]
}

/// Sale amounts up to $10M with up to 4 decimal places, plus amounts ending
/// in half a cent.
fn sale_amount() -> impl Strategy<Value = Amount> {
    prop_oneof![
        (0i64..100_000_000_000, 0u32..=4).prop_map(|(units, scale)| Amount::new(Decimal::new(units, scale))),
        (0i64..1_000_000_000).prop_map(|cents| Amount::new(Decimal::new(cents * 10 + 5, 3))),
    ]
}

/// Whole-cent sale amounts across the full supported range.
fn cent_amount() -> impl Strategy<Value = Amount> {
    prop_oneof![
        (0i64..10_000_000).prop_map(|cents| Amount::new(Decimal::new(cents, 2))),
        (0i64..i64::MAX).prop_map(|cents| Amount::new(Decimal::new(cents, 2))),
    ]
}

proptest! {
    #[test]
    fn commission_plus_net_is_sale(amount in sale_amount(), listing in listing_type(), tenths in 0u32..=1000) {
        let fee = calculator().compute_fee(amount, Some(listing), Some(Percent::from_tenths(tenths)));
        let total = fee.commission_amount.value() + fee.net_earnings.value();
        prop_assert!((total - amount.value()).abs() <= dec!(0.01));
    }

    #[test]
    fn net_is_sale_minus_commission(amount in cent_amount(), tenths in 0u32..=1000) {
        let fee = calculator().compute_fee(amount, Some(ListingType::BuyItNow), Some(Percent::from_tenths(tenths)));
        prop_assert_eq!(fee.net_earnings.value(), amount.value() - fee.commission_amount.value());
    }

    #[test]
    fn commission_never_exceeds_sale(amount in sale_amount(), listing in listing_type()) {
        let fee = calculator().compute_fee(amount, Some(listing), None);
        prop_assert!(fee.commission_amount.value() <= amount.value() + dec!(0.005));
    }

    #[test]
    fn listing_rate_is_deterministic_and_bounded(key in "[a-z_ ]{0,16}") {
        let table = CommissionRateTable::standard();
        let first = table.rate_for_key(&key);
        let second = table.rate_for_key(&key);
        prop_assert_eq!(first, second);
        prop_assert!(first.value() >= Decimal::ZERO && first.value() <= Decimal::ONE_HUNDRED);
    }

    #[test]
    fn higher_volume_never_raises_rate(a in -1_000_000i64..2_000_000_000, b in -1_000_000i64..2_000_000_000) {
        let resolver = VolumeIncentiveResolver::standard();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_tier = resolver.tier_for(Decimal::new(low, 2));
        let high_tier = resolver.tier_for(Decimal::new(high, 2));
        prop_assert!(high_tier.commission_rate_percent <= low_tier.commission_rate_percent);
        prop_assert!(high_tier.tier_name >= low_tier.tier_name);
    }

    #[test]
    fn compute_fee_is_idempotent(amount in sale_amount(), listing in listing_type(), volume in 0i64..1_000_000) {
        let calculator = calculator();
        prop_assert_eq!(
            calculator.compute_fee(amount, Some(listing), None),
            calculator.compute_fee(amount, Some(listing), None)
        );
        let volume = Decimal::from(volume);
        prop_assert_eq!(
            calculator.compute_fee_for_volume(amount, Some(listing), volume),
            calculator.compute_fee_for_volume(amount, Some(listing), volume)
        );
    }
}

#[test]
fn tier_boundaries() {
    let resolver = VolumeIncentiveResolver::standard();
    let expectations = [
        (dec!(999.99), TierName::Standard, dec!(5.0)),
        (dec!(1000), TierName::Silver, dec!(4.5)),
        (dec!(2500), TierName::Gold, dec!(4.0)),
        (dec!(5000), TierName::Diamond, dec!(3.5)),
    ];

    for (volume, tier_name, rate) in expectations {
        let tier = resolver.tier_for(volume);
        assert_eq!(tier.tier_name, tier_name);
        assert_eq!(tier.commission_rate_percent.value(), rate);
    }
}

#[test]
fn documented_scenarios() {
    let calculator = calculator();

    let fee = calculator.compute_fee(Amount::new(dec!(100)), Some(ListingType::BuyItNow), None);
    assert_eq!(fee.commission_rate_percent.value(), dec!(5.0));
    assert_eq!(fee.commission_amount.value(), dec!(5.00));
    assert_eq!(fee.net_earnings.value(), dec!(95.00));

    let fee = calculator.compute_fee_for_volume(Amount::new(dec!(250)), Some(ListingType::BuyItNow), dec!(3000));
    assert_eq!(fee.volume_tier, Some(TierName::Gold));
    assert_eq!(fee.commission_amount.value(), dec!(10.00));
    assert_eq!(fee.net_earnings.value(), dec!(240.00));

    let fee = calculator.compute_fee(Amount::zero(), Some(ListingType::Classified), None);
    assert_eq!(fee.commission_amount.value(), dec!(0.00));
    assert_eq!(fee.net_earnings.value(), dec!(0.00));
}

#[test]
fn largest_amounts_keep_cents() {
    let fee = calculator().compute_fee(Amount::new(MAX_AMOUNT), Some(ListingType::BuyItNow), None);
    assert!(fee.commission_amount < fee.net_earnings);
    assert_eq!(fee.commission_amount.value() + fee.net_earnings.value(), MAX_AMOUNT);
    assert_eq!(fee.rate_source, RateSource::ListingType);

    let service = FeeQuoteService::new(Arc::new(FeeSchedule::standard()));
    let fee = service.quote(&QuoteRequest::text("79228162514264337593543950335", "buy_it_now"));
    assert_eq!(fee.sale_amount.value(), MAX_AMOUNT);
    assert_eq!(fee.commission_amount.value() + fee.net_earnings.value(), fee.sale_amount.value());
}
