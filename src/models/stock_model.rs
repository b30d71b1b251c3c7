//! Lognormal stock model build
//!
//! raw weekly series → validation → parameter estimation → forecast,
//! producing one immutable `StockModelSnapshot`. Any stage failure aborts
//! the build.

use crate::config::ModelConfig;
use crate::core::{HistoricPoint, ModelError, ModelResult, StockModelSnapshot};

use super::estimation::estimate_params;
use super::forecast::forecast;
use super::validation::validate_series_with_config;

/// Build a snapshot with default configuration
pub fn build_snapshot(symbol: &str, raw: &[HistoricPoint]) -> ModelResult<StockModelSnapshot> {
    build_snapshot_with_config(symbol, raw, &ModelConfig::default())
}

pub fn build_snapshot_with_config(
    symbol: &str,
    raw: &[HistoricPoint],
    config: &ModelConfig,
) -> ModelResult<StockModelSnapshot> {
    let historic = validate_series_with_config(raw, config)?;
    let params = estimate_params(&historic)?;

    let last = historic
        .last()
        .ok_or_else(|| ModelError::data_integrity("Validated series is empty"))?;
    let predicted = forecast(last, &params, config)?;

    tracing::info!(
        "Built model for {}: {} weeks, annual mean {:.4}, annual volatility {:.4}",
        symbol,
        historic.len(),
        params.annual_mean,
        params.annual_volatility
    );

    Ok(StockModelSnapshot::new(
        symbol,
        params.annual_mean,
        params.annual_volatility,
        historic,
        predicted,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar::{add_days, add_weeks};
    use crate::core::ErrorKind;
    use chrono::NaiveDate;

    fn raw_series(weeks: usize) -> Vec<HistoricPoint> {
        let start = NaiveDate::from_ymd_opt(2023, 6, 5).unwrap();
        (0..weeks)
            .map(|i| {
                let close = 50.0 * (1.0 + 0.01 * ((i * 7) % 5) as f64) * (1.0 + 0.004 * i as f64);
                HistoricPoint::new(add_weeks(start, i as i64), close, close * 1.02, close * 0.98, close)
            })
            .collect()
    }

    #[test]
    fn test_snapshot_invariants() {
        let snapshot = build_snapshot("ABC", &raw_series(40)).unwrap();

        assert_eq!(snapshot.symbol(), "ABC");
        assert_eq!(snapshot.historic().len(), 40);
        assert_eq!(snapshot.forecast().len(), 52);
        assert!(snapshot.annual_volatility() > 0.0);

        let last = snapshot.last_historic().unwrap();
        assert_eq!(snapshot.forecast()[0].date, add_days(last.date, 7));
        assert!(snapshot.forecast().iter().all(|p| p.is_ordered()));
    }

    #[test]
    fn test_failure_yields_no_snapshot() {
        let err = build_snapshot("ABC", &raw_series(9)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataIntegrity);
    }

    #[test]
    fn test_independent_builds() {
        let a = build_snapshot("AAA", &raw_series(20)).unwrap();
        let b = build_snapshot("BBB", &raw_series(30)).unwrap();
        assert_eq!(a.historic().len(), 20);
        assert_eq!(b.historic().len(), 30);
        assert_ne!(a.forecast()[0].date, b.forecast()[0].date);
    }
}
