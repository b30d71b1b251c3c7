//! Weekly price records
//!
//! `HistoricPoint` is one observed trading week, `ForecastPoint` one predicted
//! week with its 95% confidence band. Both are plain `Copy` values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One observed trading week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricPoint {
    /// Week start (Monday once validated)
    pub date: NaiveDate,
    /// Opening price of the week
    pub open: f64,
    /// Weekly high
    pub high: f64,
    /// Weekly low
    pub low: f64,
    /// Closing price of the week
    pub close: f64,
}

impl HistoricPoint {
    /// Build from a (date, open, high, low, close) quote row
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
        }
    }

    /// Same prices, different week-start date
    pub fn with_date(&self, date: NaiveDate) -> Self {
        Self { date, ..*self }
    }

    /// All four prices are finite and strictly positive
    pub fn has_valid_prices(&self) -> bool {
        [self.open, self.high, self.low, self.close]
            .iter()
            .all(|p| p.is_finite() && *p > 0.0)
    }
}

/// One predicted week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    /// Expected close under the lognormal model
    pub expected: f64,
    /// Upper edge of the 95% interval
    pub upper_bound: f64,
    /// Lower edge of the 95% interval
    pub lower_bound: f64,
}

impl ForecastPoint {
    pub fn new(date: NaiveDate, expected: f64, upper_bound: f64, lower_bound: f64) -> Self {
        Self {
            date,
            expected,
            upper_bound,
            lower_bound,
        }
    }

    /// lower <= expected <= upper
    pub fn is_ordered(&self) -> bool {
        self.lower_bound <= self.expected && self.expected <= self.upper_bound
    }

    /// Width of the confidence band
    pub fn band_width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_date_keeps_prices() {
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        let p = HistoricPoint::new(d1, 10.0, 12.0, 9.0, 11.0);
        let moved = p.with_date(d2);

        assert_eq!(moved.date, d2);
        assert_eq!(moved.open, 10.0);
        assert_eq!(moved.close, 11.0);
        assert_eq!(p.date, d1);
    }

    #[test]
    fn test_price_validity() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert!(HistoricPoint::new(d, 1.0, 1.0, 1.0, 1.0).has_valid_prices());
        assert!(!HistoricPoint::new(d, 1.0, 1.0, 1.0, 0.0).has_valid_prices());
        assert!(!HistoricPoint::new(d, f64::NAN, 1.0, 1.0, 1.0).has_valid_prices());
    }

    #[test]
    fn test_forecast_ordering() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert!(ForecastPoint::new(d, 100.0, 110.0, 90.0).is_ordered());
        assert!(!ForecastPoint::new(d, 100.0, 95.0, 90.0).is_ordered());
        assert_eq!(ForecastPoint::new(d, 100.0, 110.0, 90.0).band_width(), 20.0);
    }
}
