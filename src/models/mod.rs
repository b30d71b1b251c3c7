//! Lognormal Stock Model
//!
//! Implements:
//! - Weekly series validation (calendar alignment, gap detection)
//! - Drift and volatility estimation (bias-corrected second moment)
//! - 52-week forecast with a 95% confidence band
//! - Black-Scholes European pricing

pub mod black_scholes;
pub mod estimation;
pub mod forecast;
pub mod stock_model;
pub mod validation;

pub use black_scholes::{call_price, call_put, norm_cdf, put_from_call};
pub use estimation::*;
pub use forecast::*;
pub use stock_model::*;
pub use validation::*;
