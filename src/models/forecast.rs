//! Weekly price forecast
//!
//! Projects the expected close and a symmetric 95% band from the last
//! observed week. For week t (in years τ = t/52):
//!
//!   expected = S · exp(μ τ)
//!   bound    = expected · exp(-σ²τ/2 ± |z| σ √τ)

use crate::config::{ModelConfig, WEEKS_PER_YEAR};
use crate::core::calendar::add_weeks;
use crate::core::{ForecastPoint, HistoricPoint, ModelError, ModelResult};

use super::estimation::LognormalParams;

/// Forecast `config.forecast_weeks` weeks past `last`
pub fn forecast(
    last: &HistoricPoint,
    params: &LognormalParams,
    config: &ModelConfig,
) -> ModelResult<Vec<ForecastPoint>> {
    let mu = params.annual_mean;
    let sigma = params.annual_volatility;
    let z = config.z_score.abs();
    let weeks_per_year = WEEKS_PER_YEAR as f64;

    (1..=config.forecast_weeks)
        .map(|week| {
            let tau = week as f64 / weeks_per_year;
            let expected = last.close * (mu * tau).exp();
            let convexity = -0.5 * sigma * sigma * tau;
            let spread = z * sigma * tau.sqrt();

            let point = ForecastPoint::new(
                add_weeks(last.date, week as i64),
                expected,
                expected * (convexity + spread).exp(),
                expected * (convexity - spread).exp(),
            );

            if !point.expected.is_finite() || !point.is_ordered() {
                return Err(ModelError::computation(format!(
                    "Forecast band out of order in week {}: lower {}, expected {}, upper {}",
                    week, point.lower_bound, point.expected, point.upper_bound
                )));
            }
            Ok(point)
        })
        .collect()
}
