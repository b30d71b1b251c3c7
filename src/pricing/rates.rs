//! Risk-free force of interest
//!
//! The raw reference quote (10-year treasury yield, percent) has the
//! configured risk premium subtracted, then becomes a continuously
//! compounded force `r = ln(1 + pct/100)`.

use crate::config::PricingConfig;
use crate::core::{ModelError, ModelResult};

/// Force of interest from an annual effective rate in percent
pub fn risk_free_force(rate_pct: f64) -> ModelResult<f64> {
    let growth = 1.0 + rate_pct / 100.0;
    if !(growth.is_finite() && growth > 0.0) {
        return Err(ModelError::computation(format!(
            "Risk-free rate {}% has no force of interest",
            rate_pct
        )));
    }
    Ok(growth.ln())
}

impl PricingConfig {
    /// Raw treasury quote less the risk premium, in percent
    pub fn adjusted_rate_pct(&self, raw_quote_pct: f64) -> f64 {
        raw_quote_pct - self.risk_premium_pct
    }

    /// Force of interest from a raw treasury quote
    pub fn risk_free_force(&self, raw_quote_pct: f64) -> ModelResult<f64> {
        let adjusted = self.adjusted_rate_pct(raw_quote_pct);
        tracing::debug!(
            "Risk-free rate {:.3}% (quote {:.3}% less premium {:.3}%)",
            adjusted,
            raw_quote_pct,
            self.risk_premium_pct
        );
        risk_free_force(adjusted)
    }
}
