pub mod types;
pub mod error;
pub mod config;
pub mod fees;
pub mod observability;
pub mod service;

pub use error::{Error, Result};
pub use fees::{FeeCalculator, FeeExample, FeeSchedule};
pub use service::{FeeQuoteService, QuoteRequest, SaleAmountInput};

// Environment variable selecting the config overlay (config/{env}.toml)
pub const CONFIG_ENV_VAR: &str = "MARKETFEES_ENV";

pub const DEFAULT_CONFIG_ENV: &str = "development";
