//! Data fetching
//!
//! Handles:
//! - The `MarketDataSource` boundary and an in-memory source
//! - Weekly quote CSV parsing
//! - Yahoo Finance chart API (blocking)

pub mod source;
pub mod weekly_csv;
pub mod yahoo;

pub use source::*;
pub use weekly_csv::*;
pub use yahoo::*;
