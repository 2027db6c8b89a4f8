use anyhow::{bail, Context};
use market_fees::config::loader::AppConfig;
use market_fees::observability::{metrics, tracing as logging};
use market_fees::{FeeQuoteService, FeeSchedule, QuoteRequest, CONFIG_ENV_VAR, DEFAULT_CONFIG_ENV};
use std::sync::Arc;

const USAGE: &str = "usage: market_fees [--metrics] <sale_amount> <listing_type> [monthly_volume]";

const METRICS_FLAG: &str = "--metrics";

fn main() -> anyhow::Result<()> {
    let (flags, args): (Vec<String>, Vec<String>) = std::env::args()
        .skip(1)
        .partition(|arg| arg.starts_with("--"));
    if args.len() < 2 || args.len() > 3 || flags.iter().any(|flag| flag != METRICS_FLAG) {
        bail!(USAGE);
    }
    let print_metrics = !flags.is_empty();

    let env = std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_ENV.to_string());
    let config = AppConfig::load(&env)
        .with_context(|| format!("loading configuration for {:?}", env))?;

    logging::init(&config.logging).context("initializing logging")?;
    if print_metrics {
        metrics::register_metrics().context("registering metrics")?;
    }

    let schedule = FeeSchedule::from_config(&config.fees)
        .context("validating fee schedule")?;
    let service = FeeQuoteService::new(Arc::new(schedule));

    let mut request = QuoteRequest::text(&args[0], &args[1]);
    if let Some(volume) = args.get(2) {
        request = request.with_monthly_volume(volume);
    }

    let (fee, progress) = service.quote_with_progress(&request);

    let output = serde_json::json!({
        "fee": fee,
        "next_tier": progress,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    if print_metrics {
        print!("{}", metrics::render_metrics().context("rendering metrics")?);
    }

    Ok(())
}
