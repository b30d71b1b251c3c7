//! Core data types for the lognormal stock model
//!
//! Defines fundamental types:
//! - HistoricPoint / ForecastPoint: weekly observed and predicted prices
//! - StockModelSnapshot: the immutable result of one model build
//! - OptionType / PriceRow: option side and priced table row
//! - calendar: week alignment and business-day arithmetic

pub mod calendar;
pub mod error;
pub mod option;
pub mod point;
pub mod snapshot;

pub use error::*;
pub use option::*;
pub use point::*;
pub use snapshot::*;
