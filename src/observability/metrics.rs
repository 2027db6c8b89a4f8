use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};
use crate::error::{Error, Result};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    pub static ref FEE_QUOTES: IntCounter = IntCounter::new(
        "fee_quotes_total",
        "Total number of fee examples computed"
    ).expect("metric can be created");

    pub static ref LISTING_TYPE_FALLBACKS: IntCounter = IntCounter::new(
        "listing_type_fallbacks_total",
        "Quotes that fell back to the default commission rate"
    ).expect("metric can be created");

    // Labelled by input field: "sale_amount" or "monthly_volume"
    pub static ref MALFORMED_INPUTS: IntCounterVec = IntCounterVec::new(
        Opts::new("malformed_inputs_total", "Malformed caller inputs replaced by defaults"),
        &["field"]
    ).expect("metric can be created");
}

pub fn register_metrics() -> Result<()> {
    REGISTRY.register(Box::new(FEE_QUOTES.clone())).map_err(metrics_error)?;
    REGISTRY.register(Box::new(LISTING_TYPE_FALLBACKS.clone())).map_err(metrics_error)?;
    REGISTRY.register(Box::new(MALFORMED_INPUTS.clone())).map_err(metrics_error)?;
    Ok(())
}

/// Text exposition of every registered metric.
pub fn render_metrics() -> Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new()
        .encode(&REGISTRY.gather(), &mut buffer)
        .map_err(metrics_error)?;

    String::from_utf8(buffer).map_err(|e| Error::MetricsError(e.to_string()))
}

fn metrics_error(e: prometheus::Error) -> Error {
    Error::MetricsError(e.to_string())
}
