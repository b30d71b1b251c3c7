//! End-to-end model run
//!
//! Fetches inputs from a `MarketDataSource`, builds the stock model and
//! prices the option ladder. Nothing is returned unless every stage
//! succeeds.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{ModelConfig, PricingConfig};
use crate::core::{ModelResult, PriceRow, StockModelSnapshot};
use crate::data::{normalize_symbol, MarketDataSource};
use crate::models::build_snapshot_with_config;
use crate::pricing::PriceTable;

/// Snapshot and price table from one run
#[derive(Debug, Clone, Serialize)]
pub struct ModelRun {
    pub snapshot: StockModelSnapshot,
    pub table: PriceTable,
}

impl ModelRun {
    pub fn rows(&self) -> Vec<PriceRow> {
        self.table.rows()
    }

    /// Pretty-printed JSON of the whole run
    pub fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run with default configuration
pub fn run_model<S: MarketDataSource + ?Sized>(
    source: &S,
    symbol: &str,
    today: NaiveDate,
) -> ModelResult<ModelRun> {
    run_model_with_config(
        source,
        symbol,
        today,
        &ModelConfig::default(),
        &PricingConfig::default(),
    )
}

pub fn run_model_with_config<S: MarketDataSource + ?Sized>(
    source: &S,
    symbol: &str,
    today: NaiveDate,
    model_config: &ModelConfig,
    pricing_config: &PricingConfig,
) -> ModelResult<ModelRun> {
    let symbol = normalize_symbol(symbol)?;

    let raw = source.weekly_history(&symbol)?;
    let snapshot = build_snapshot_with_config(&symbol, &raw, model_config)?;

    let spot = source.spot_price(&symbol)?;
    let rate = pricing_config.risk_free_force(source.treasury_yield_pct()?)?;
    let table = PriceTable::for_snapshot(&snapshot, spot, rate, today, pricing_config)?;

    Ok(ModelRun { snapshot, table })
}
