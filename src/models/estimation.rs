//! Lognormal parameter estimation
//!
//! Weekly log-return drift and volatility from a validated series, scaled to
//! annual figures. The variance uses the bias-corrected second moment
//!
//!   var = (Σ r_i² / (n-1) - mean²) · (n-1)/(n-2)
//!
//! where `mean` is the endpoint drift `ln(close[n-1]/close[0]) / (n-1)`.

use serde::{Deserialize, Serialize};

use crate::config::WEEKS_PER_YEAR;
use crate::core::{HistoricPoint, ModelError, ModelResult};

/// Estimated lognormal parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LognormalParams {
    pub weekly_mean: f64,
    pub weekly_volatility: f64,
    /// 52 · weekly mean
    pub annual_mean: f64,
    /// sqrt(52) · weekly volatility
    pub annual_volatility: f64,
}

impl LognormalParams {
    /// Scale weekly figures to annual ones
    pub fn from_weekly(weekly_mean: f64, weekly_volatility: f64) -> Self {
        let weeks = WEEKS_PER_YEAR as f64;
        Self {
            weekly_mean,
            weekly_volatility,
            annual_mean: weeks * weekly_mean,
            annual_volatility: weeks.sqrt() * weekly_volatility,
        }
    }
}

/// Estimate drift and volatility from a chronological weekly series
pub fn estimate_params(series: &[HistoricPoint]) -> ModelResult<LognormalParams> {
    let n = series.len();
    if n < 3 {
        return Err(ModelError::computation(format!(
            "Variance correction needs at least 3 samples, got {}",
            n
        )));
    }

    let df = (n - 1) as f64;
    let first = series[0].close;
    let last = series[n - 1].close;
    let weekly_mean = (last / first).ln() / df;

    let sum_sq: f64 = series
        .windows(2)
        .map(|w| (w[1].close / w[0].close).ln().powi(2))
        .sum();

    let variance = (sum_sq / df - weekly_mean * weekly_mean) * df / (df - 1.0);
    if !variance.is_finite() {
        return Err(ModelError::computation(format!(
            "Weekly variance is not finite ({})",
            variance
        )));
    }
    if variance < 0.0 {
        return Err(ModelError::computation(format!(
            "Negative weekly variance {:e}; series is numerically degenerate",
            variance
        )));
    }

    let params = LognormalParams::from_weekly(weekly_mean, variance.sqrt());
    tracing::debug!(
        "Estimated annual mean {:.6}, annual volatility {:.6} from {} weeks",
        params.annual_mean,
        params.annual_volatility,
        n
    );

    Ok(params)
}
