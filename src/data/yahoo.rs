//! Yahoo Finance data fetcher
//!
//! Weekly price history, last trade price and the 10-year treasury yield
//! from Yahoo Finance's unofficial chart API.
//!
//! Note: This is for educational/research purposes. Yahoo Finance
//! data is delayed ~15 minutes and intended for personal use.

use chrono::DateTime;
use serde::Deserialize;

use crate::core::{HistoricPoint, ModelError, ModelResult};

use super::source::{MarketDataSource, TREASURY_SYMBOL};

/// Yahoo Finance API client
pub struct YahooClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> ModelResult<Self> {
        Self::with_base_url("https://query1.finance.yahoo.com/v8/finance")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> ModelResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .map_err(|e| ModelError::data_fetch(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn chart(&self, symbol: &str, interval: &str, range: &str) -> ModelResult<ChartData> {
        let url = format!("{}/chart/{}", self.base_url, symbol);

        let response: ChartResponse = self
            .client
            .get(&url)
            .query(&[("interval", interval), ("range", range)])
            .send()
            .map_err(|e| ModelError::data_fetch(format!("Problem retrieving {}: {}", symbol, e)))?
            .error_for_status()
            .map_err(|e| ModelError::data_fetch(format!("Problem retrieving {}: {}", symbol, e)))?
            .json()
            .map_err(|e| ModelError::data_fetch(format!("Failed to parse chart for {}: {}", symbol, e)))?;

        response
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| ModelError::data_fetch(format!("No chart data returned for {}", symbol)))
    }

    /// Weekly OHLC rows for the last year
    pub fn get_weekly_history(&self, symbol: &str) -> ModelResult<Vec<HistoricPoint>> {
        let data = self.chart(symbol, "1wk", "1y")?;
        let points = data.weekly_points();
        tracing::info!("Fetched {} weekly rows for {}", points.len(), symbol);
        Ok(points)
    }

    /// Last trade price
    pub fn get_last_price(&self, symbol: &str) -> ModelResult<f64> {
        let data = self.chart(symbol, "1d", "1d")?;
        data.meta
            .regular_market_price
            .ok_or_else(|| ModelError::data_fetch(format!("No last trade price for {}", symbol)))
    }
}

impl MarketDataSource for YahooClient {
    fn weekly_history(&self, symbol: &str) -> ModelResult<Vec<HistoricPoint>> {
        self.get_weekly_history(symbol)
    }

    fn spot_price(&self, symbol: &str) -> ModelResult<f64> {
        self.get_last_price(symbol)
    }

    fn treasury_yield_pct(&self) -> ModelResult<f64> {
        self.get_last_price(TREASURY_SYMBOL)
    }
}

// Yahoo Finance API response structures

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartData>>,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
    /// Exchange offset from UTC, seconds
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
}

impl ChartData {
    /// Rows with all four prices present, dated in exchange-local time
    fn weekly_points(&self) -> Vec<HistoricPoint> {
        let Some(quote) = self.indicators.quote.first() else {
            return Vec::new();
        };

        self.timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, &ts)| {
                let date = DateTime::from_timestamp(ts + self.meta.gmtoffset, 0)?.date_naive();
                Some(HistoricPoint::new(
                    date,
                    (*quote.open.get(i)?)?,
                    (*quote.high.get(i)?)?,
                    (*quote.low.get(i)?)?,
                    (*quote.close.get(i)?)?,
                ))
            })
            .collect()
    }
}
