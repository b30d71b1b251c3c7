//! Stock model snapshot
//!
//! The read-only result of one model build: estimated parameters, the
//! validated weekly history and the 52-week forecast. Only the model pipeline
//! constructs one; consumers get shared references.

use chrono::NaiveDate;
use serde::Serialize;

use super::calendar::add_days;
use super::point::{ForecastPoint, HistoricPoint};

#[derive(Debug, Clone, Serialize)]
pub struct StockModelSnapshot {
    symbol: String,
    annual_mean: f64,
    annual_volatility: f64,
    historic: Vec<HistoricPoint>,
    forecast: Vec<ForecastPoint>,
}

impl StockModelSnapshot {
    pub(crate) fn new(
        symbol: impl Into<String>,
        annual_mean: f64,
        annual_volatility: f64,
        historic: Vec<HistoricPoint>,
        forecast: Vec<ForecastPoint>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            annual_mean,
            annual_volatility,
            historic,
            forecast,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Annualized log drift
    pub fn annual_mean(&self) -> f64 {
        self.annual_mean
    }

    /// Annualized volatility of weekly log returns
    pub fn annual_volatility(&self) -> f64 {
        self.annual_volatility
    }

    /// Validated history, oldest first
    pub fn historic(&self) -> &[HistoricPoint] {
        &self.historic
    }

    /// Weekly forecast, nearest first
    pub fn forecast(&self) -> &[ForecastPoint] {
        &self.forecast
    }

    pub fn last_historic(&self) -> Option<&HistoricPoint> {
        self.historic.last()
    }

    /// Date one calendar year before the last observed week, used as the
    /// left edge of a one-year chart window
    pub fn one_year_before_last(&self) -> Option<NaiveDate> {
        self.last_historic().map(|p| add_days(p.date, -365))
    }

    /// Global (low, high) over historic lows/highs and forecast bounds
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let lows = self
            .historic
            .iter()
            .map(|p| p.low)
            .chain(self.forecast.iter().map(|p| p.lower_bound));
        let highs = self
            .historic
            .iter()
            .map(|p| p.high)
            .chain(self.forecast.iter().map(|p| p.upper_bound));

        let low = lows.fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.min(v))))?;
        let high = highs.fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))?;
        Some((low, high))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_spans_history_and_forecast() {
        let d0 = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let snapshot = StockModelSnapshot::new(
            "TEST",
            0.1,
            0.2,
            vec![
                HistoricPoint::new(d0, 10.0, 12.0, 9.0, 11.0),
                HistoricPoint::new(d1, 11.0, 13.0, 10.0, 12.0),
            ],
            vec![ForecastPoint::new(add_days(d1, 7), 12.1, 14.5, 8.5)],
        );

        assert_eq!(snapshot.price_range(), Some((8.5, 14.5)));
        assert_eq!(
            snapshot.one_year_before_last(),
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );
        assert_eq!(snapshot.symbol(), "TEST");
    }

    #[test]
    fn test_empty_snapshot_has_no_range() {
        let snapshot = StockModelSnapshot::new("EMPTY", 0.0, 0.0, Vec::new(), Vec::new());
        assert_eq!(snapshot.price_range(), None);
        assert_eq!(snapshot.one_year_before_last(), None);
    }
}
