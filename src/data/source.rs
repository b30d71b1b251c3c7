//! Market data source boundary
//!
//! The model core performs no I/O. Whatever fetches quotes implements
//! `MarketDataSource`; its failures are reported as `ModelError::DataFetch`
//! and pass through the pipeline unchanged.

use std::collections::HashMap;

use crate::core::{HistoricPoint, ModelError, ModelResult};

/// Ten-year treasury yield, the risk-free reference
pub const TREASURY_SYMBOL: &str = "^TNX";

/// Blocking provider of the three inputs a model run needs
pub trait MarketDataSource {
    /// Up to a year of weekly OHLC rows, any order
    fn weekly_history(&self, symbol: &str) -> ModelResult<Vec<HistoricPoint>>;

    /// Last trade price
    fn spot_price(&self, symbol: &str) -> ModelResult<f64>;

    /// Raw treasury yield quote in percent (no premium removed)
    fn treasury_yield_pct(&self) -> ModelResult<f64>;
}

/// Check and upper-case a ticker: letters only
pub fn normalize_symbol(symbol: &str) -> ModelResult<String> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ModelError::invalid_input(format!(
            "Ticker must contain letters only, got {:?}",
            symbol
        )));
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// In-memory source, for offline runs and tests
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    history: HashMap<String, Vec<HistoricPoint>>,
    spots: HashMap<String, f64>,
    treasury_yield_pct: Option<f64>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(mut self, symbol: &str, history: Vec<HistoricPoint>) -> Self {
        self.history.insert(symbol.to_ascii_uppercase(), history);
        self
    }

    pub fn with_spot(mut self, symbol: &str, spot: f64) -> Self {
        self.spots.insert(symbol.to_ascii_uppercase(), spot);
        self
    }

    pub fn with_treasury_yield(mut self, pct: f64) -> Self {
        self.treasury_yield_pct = Some(pct);
        self
    }
}

impl MarketDataSource for StaticSource {
    fn weekly_history(&self, symbol: &str) -> ModelResult<Vec<HistoricPoint>> {
        self.history
            .get(&symbol.to_ascii_uppercase())
            .cloned()
            .ok_or_else(|| ModelError::data_fetch(format!("No price history for {}", symbol)))
    }

    fn spot_price(&self, symbol: &str) -> ModelResult<f64> {
        self.spots
            .get(&symbol.to_ascii_uppercase())
            .copied()
            .ok_or_else(|| ModelError::data_fetch(format!("No spot quote for {}", symbol)))
    }

    fn treasury_yield_pct(&self) -> ModelResult<f64> {
        self.treasury_yield_pct
            .ok_or_else(|| ModelError::data_fetch(format!("No quote for {}", TREASURY_SYMBOL)))
    }
}
