use std::sync::Arc;
use rust_decimal::Decimal;
use crate::fees::calculator::{FeeCalculator, FeeExample};
use crate::fees::rate_table::RateSource;
use crate::fees::schedule::FeeSchedule;
use crate::fees::volume_tier::TierProgress;
use crate::observability::metrics::{FEE_QUOTES, LISTING_TYPE_FALLBACKS, MALFORMED_INPUTS};
use crate::observability::tracing::trace_fee_quote;
use crate::types::amount::{parse_decimal, Amount};
use crate::types::listing_type::ListingType;

/// Range of the sale amount slider on the fee explainer page.
pub const SLIDER_MIN: Decimal = Decimal::TEN;
pub const SLIDER_MAX: Decimal = Decimal::ONE_THOUSAND;

/// How the caller entered the sale amount. The slider is bounded to
/// `[SLIDER_MIN, SLIDER_MAX]`; the text field is not and takes precedence.
#[derive(Clone, Debug, PartialEq)]
pub enum SaleAmountInput {
    Text(String),
    Slider(f64),
}

impl SaleAmountInput {
    /// Returns the amount and whether the input had to be defaulted.
    pub fn resolve(&self) -> (Amount, bool) {
        match self {
            SaleAmountInput::Text(text) => match Amount::parse(text) {
                Ok(amount) => (amount, false),
                Err(_) => (Amount::zero(), true),
            },
            SaleAmountInput::Slider(value) if value.is_finite() => (
                Amount::from_f64(*value).clamp(Amount::new(SLIDER_MIN), Amount::new(SLIDER_MAX)),
                false,
            ),
            SaleAmountInput::Slider(_) => (Amount::zero(), true),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuoteRequest {
    pub sale_amount: SaleAmountInput,
    pub listing_key: String,
    pub monthly_volume: Option<String>,
}

impl QuoteRequest {
    pub fn text(sale_amount: &str, listing_key: &str) -> Self {
        QuoteRequest {
            sale_amount: SaleAmountInput::Text(sale_amount.to_string()),
            listing_key: listing_key.to_string(),
            monthly_volume: None,
        }
    }

    pub fn with_monthly_volume(mut self, monthly_volume: &str) -> Self {
        self.monthly_volume = Some(monthly_volume.to_string());
        self
    }
}

/// Caller-facing entry point. Turns raw page inputs into a fee example and
/// never fails: malformed input is defaulted, logged and counted.
pub struct FeeQuoteService {
    calculator: FeeCalculator,
}

impl FeeQuoteService {
    pub fn new(schedule: Arc<FeeSchedule>) -> Self {
        FeeQuoteService {
            calculator: FeeCalculator::new(schedule),
        }
    }

    pub fn quote(&self, request: &QuoteRequest) -> FeeExample {
        self.quote_with_progress(request).0
    }

    /// Quote plus progress toward the next volume tier when the request
    /// carries a readable monthly volume. Each input is parsed once.
    pub fn quote_with_progress(&self, request: &QuoteRequest) -> (FeeExample, Option<TierProgress>) {
        let span = trace_fee_quote(&request.listing_key);
        let _guard = span.enter();

        let (sale_amount, malformed) = request.sale_amount.resolve();
        if malformed {
            MALFORMED_INPUTS.with_label_values(&["sale_amount"]).inc();
            tracing::debug!(input = ?request.sale_amount, "Malformed sale amount treated as zero");
        }

        let listing_type = ListingType::from_key(&request.listing_key);
        let monthly_volume = request
            .monthly_volume
            .as_deref()
            .and_then(|text| self.parse_volume(text));

        let fee = match monthly_volume {
            Some(volume) => self.calculator.compute_fee_for_volume(sale_amount, listing_type, volume),
            None => self.calculator.compute_fee(sale_amount, listing_type, None),
        };

        if fee.rate_source == RateSource::ListingDefault {
            LISTING_TYPE_FALLBACKS.inc();
            tracing::debug!(
                listing_key = %request.listing_key,
                rate = %fee.commission_rate_percent,
                "Listing type has no active rate, using default"
            );
        }

        FEE_QUOTES.inc();
        tracing::debug!(
            sale_amount = %fee.sale_amount,
            rate = %fee.commission_rate_percent,
            commission = %fee.commission_amount,
            net = %fee.net_earnings,
            "Fee example computed"
        );

        let progress = monthly_volume
            .and_then(|volume| self.calculator.schedule().volume_tiers().next_tier(volume));

        (fee, progress)
    }

    fn parse_volume(&self, text: &str) -> Option<Decimal> {
        match parse_decimal(text) {
            Ok(volume) => Some(volume),
            Err(_) => {
                MALFORMED_INPUTS.with_label_values(&["monthly_volume"]).inc();
                tracing::warn!(input = %text, "Malformed monthly volume ignored");
                None
            }
        }
    }
}
