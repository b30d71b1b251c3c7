//! Model and pricing configuration

use serde::{Deserialize, Serialize};

/// Weeks in a model year (drift and volatility scaling)
pub const WEEKS_PER_YEAR: usize = 52;

/// Fewest validated weeks the estimator will model
pub const MIN_HISTORY_WEEKS: usize = 10;

/// Most recent weeks taken from the raw series
pub const MAX_HISTORY_WEEKS: usize = 52;

/// Weeks projected forward
pub const FORECAST_WEEKS: usize = 52;

/// 2.5th percentile of the standard normal (two-sided 95% band)
pub const Z_SCORE_95: f64 = -1.959963985;

/// Trading days per year used to convert business days to years
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Strikes on each side of spot in the strike ladder
pub const STRIKES_PER_SIDE: i32 = 3;

/// Weekly expirations listed
pub const WEEKLY_EXPIRIES: usize = 8;

/// Quarterly expirations listed after the weeklies
pub const QUARTERLY_EXPIRIES: usize = 8;

/// Weeks between quarterly expirations
pub const WEEKS_PER_QUARTER: i64 = 13;

/// Percentage points taken off the raw treasury quote before use as the
/// risk-free rate. A heuristic, not a financial identity.
pub const DEFAULT_RISK_PREMIUM_PCT: f64 = 1.0;

/// Configuration for validation, estimation and forecasting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Minimum validated weeks (after dropping a partial first week)
    /// Default: 10
    pub min_history_weeks: usize,

    /// Only this many most recent raw points are modeled
    /// Default: 52
    pub max_history_weeks: usize,

    /// Forecast horizon in weeks
    /// Default: 52
    pub forecast_weeks: usize,

    /// Lower-tail normal quantile for the confidence band
    /// Default: -1.959963985
    pub z_score: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            min_history_weeks: MIN_HISTORY_WEEKS,
            max_history_weeks: MAX_HISTORY_WEEKS,
            forecast_weeks: FORECAST_WEEKS,
            z_score: Z_SCORE_95,
        }
    }
}

/// Configuration for the option price table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Subtracted from the raw treasury yield (percentage points)
    /// Default: 1.0
    pub risk_premium_pct: f64,

    /// Business days per year for time-to-maturity
    /// Default: 252
    pub trading_days_per_year: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            risk_premium_pct: DEFAULT_RISK_PREMIUM_PCT,
            trading_days_per_year: TRADING_DAYS_PER_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let model = ModelConfig::default();
        assert_eq!(model.min_history_weeks, 10);
        assert_eq!(model.max_history_weeks, 52);
        assert_eq!(model.forecast_weeks, 52);
        assert!(model.z_score < 0.0);

        let pricing = PricingConfig::default();
        assert_eq!(pricing.risk_premium_pct, 1.0);
        assert_eq!(pricing.trading_days_per_year, 252.0);
    }

    #[test]
    fn test_config_from_json() {
        let cfg: PricingConfig =
            serde_json::from_str(r#"{"risk_premium_pct":0.5,"trading_days_per_year":250.0}"#)
                .unwrap();
        assert_eq!(cfg.risk_premium_pct, 0.5);
        assert_eq!(cfg.trading_days_per_year, 250.0);
    }
}
