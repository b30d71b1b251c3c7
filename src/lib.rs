//! # Lognormal Options - Stock Forecast and Black-Scholes Price Ladder
//!
//! Models a stock's weekly closing prices as geometric Brownian motion,
//! forecasts a year ahead, and prices a grid of European options on it.
//!
//! ## Overview
//!
//! A model run goes through:
//! - **Validation**: sort, drop a partial first week, Monday-align, require
//!   gap-free weekly spacing and at least 10 weeks
//! - **Estimation**: annualized drift and bias-corrected volatility of
//!   weekly log returns
//! - **Forecast**: 52 weekly expected prices with a 95% confidence band
//! - **Pricing**: 7 strikes × 16 expirations through Black-Scholes, puts by
//!   put-call parity
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lognormal_options::prelude::*;
//!
//! let csv = std::fs::read_to_string("weekly.csv").unwrap();
//! let raw = parse_weekly_csv(&csv).unwrap();
//!
//! // Build the stock model
//! let snapshot = build_snapshot("GOOG", &raw).unwrap();
//!
//! // Price the option ladder
//! let config = PricingConfig::default();
//! let rate = config.risk_free_force(4.3).unwrap();
//! let today = chrono::Local::now().date_naive();
//! let table = PriceTable::for_snapshot(&snapshot, 171.5, rate, today, &config).unwrap();
//!
//! for row in table.rows() {
//!     println!("{} {:.2} {:.4} {:.4}", row.expiration, row.strike, row.call_price, row.put_price);
//! }
//! ```
//!
//! ## What This Model Does NOT Do
//!
//! - Model dividends or American/path-dependent exercise
//! - Use intraday or daily data
//! - Know about market holidays (business days are Monday to Friday)
//! - Predict prices in any reliable sense

pub mod config;
pub mod core;
pub mod data;
pub mod models;
pub mod pipeline;
pub mod pricing;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        ErrorKind, ForecastPoint, HistoricPoint, ModelError, ModelResult, OptionType, PriceRow,
        StockModelSnapshot,
    };

    pub use crate::config::{ModelConfig, PricingConfig};

    // Data fetching
    pub use crate::data::{
        normalize_symbol, parse_spot_quote, parse_weekly_csv, read_weekly_csv, MarketDataSource,
        StaticSource, YahooClient,
    };

    // Models
    pub use crate::models::{
        build_snapshot, build_snapshot_with_config, call_price, call_put, estimate_params,
        forecast, norm_cdf, put_from_call, validate_series, LognormalParams,
    };

    // Pricing
    pub use crate::pricing::{
        expiration_ladder, risk_free_force, strike_ladder, PriceTable, PricingLadder,
    };

    pub use crate::pipeline::{run_model, run_model_with_config, ModelRun};
}

// Re-export main types at crate root
pub use crate::core::{ModelError, ModelResult, StockModelSnapshot};
pub use crate::pipeline::{run_model, ModelRun};
