use std::sync::Arc;
use market_fees::observability::metrics::{FEE_QUOTES, MALFORMED_INPUTS};
use market_fees::{FeeQuoteService, FeeSchedule, QuoteRequest};

// Single test in this binary so the global counters see no other traffic.
#[test]
fn malformed_volume_is_counted_once_per_quote() {
    let service = FeeQuoteService::new(Arc::new(FeeSchedule::standard()));
    let volume_errors = MALFORMED_INPUTS.with_label_values(&["monthly_volume"]);
    let (volume_before, quotes_before) = (volume_errors.get(), FEE_QUOTES.get());

    let request = QuoteRequest::text("100", "buy_it_now").with_monthly_volume("a great deal");
    let (fee, progress) = service.quote_with_progress(&request);

    assert!(progress.is_none());
    assert_eq!(fee.volume_tier, None);
    assert_eq!(volume_errors.get() - volume_before, 1);
    assert_eq!(FEE_QUOTES.get() - quotes_before, 1);
}
