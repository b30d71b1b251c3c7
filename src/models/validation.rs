//! Weekly series validation
//!
//! Turns a raw weekly quote series into a chronological, Monday-aligned,
//! gap-free sequence, or explains why it cannot.
//!
//! Steps:
//! 1. Sort ascending by date and keep the most recent `max_history_weeks`
//! 2. Drop a leading point that does not start on a Monday (partial first
//!    week, e.g. an IPO), then check the new first point once more
//! 3. Require at least `min_history_weeks` points
//! 4. Move any remaining non-Monday date back to its week's Monday (the
//!    nominal week start was a market holiday)
//! 5. Require every date to follow the previous one by exactly 7 days

use crate::config::ModelConfig;
use crate::core::calendar::{add_weeks, is_monday, monday_on_or_before};
use crate::core::{HistoricPoint, ModelError, ModelResult};

/// Validate a raw weekly series with the default limits
pub fn validate_series(raw: &[HistoricPoint]) -> ModelResult<Vec<HistoricPoint>> {
    validate_series_with_config(raw, &ModelConfig::default())
}

/// Validate a raw weekly series.
///
/// The caller's slice is left untouched; a new sequence is returned.
pub fn validate_series_with_config(
    raw: &[HistoricPoint],
    config: &ModelConfig,
) -> ModelResult<Vec<HistoricPoint>> {
    let mut series = raw.to_vec();
    series.sort_by_key(|p| p.date);

    if series.len() > config.max_history_weeks {
        let excess = series.len() - config.max_history_weeks;
        tracing::debug!("Discarding {} weeks older than the modeling window", excess);
        series.drain(..excess);
    }

    if series.first().map_or(false, |p| !is_monday(p.date)) {
        let dropped = series.remove(0);
        tracing::warn!(
            "Dropping partial first week starting {} ({})",
            dropped.date,
            dropped.date.format("%A")
        );

        // Checked once more, never realigned
        if series.first().map_or(false, |p| !is_monday(p.date)) {
            let dropped = series.remove(0);
            tracing::warn!(
                "Dropping second leading week starting {} ({})",
                dropped.date,
                dropped.date.format("%A")
            );
        }
    }

    if series.len() < config.min_history_weeks {
        return Err(ModelError::data_integrity(format!(
            "Not enough data to model: {} weeks after cleanup, need at least {}",
            series.len(),
            config.min_history_weeks
        )));
    }

    let series: Vec<HistoricPoint> = series
        .into_iter()
        .map(|p| {
            if is_monday(p.date) {
                p
            } else {
                let monday = monday_on_or_before(p.date);
                tracing::debug!("Re-aligning week start {} to {}", p.date, monday);
                p.with_date(monday)
            }
        })
        .collect();

    if let Some(bad) = series.iter().find(|p| !p.has_valid_prices()) {
        return Err(ModelError::data_integrity(format!(
            "Non-positive or non-finite price in week {}",
            bad.date
        )));
    }

    for pair in series.windows(2) {
        let expected = add_weeks(pair[0].date, 1);
        let actual = pair[1].date;
        if actual != expected {
            return Err(ModelError::data_integrity(format!(
                "Data is missing, can't continue. Expected: {}; Actual: {}",
                expected, actual
            )));
        }
    }

    if let (Some(first), Some(last)) = (series.first(), series.last()) {
        tracing::debug!(
            "Validated {} weeks from {} to {}",
            series.len(),
            first.date,
            last.date
        );
    }

    Ok(series)
}
