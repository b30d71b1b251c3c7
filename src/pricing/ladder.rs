//! Strike and expiration ladders
//!
//! Strikes are spaced one weekly standard deviation apart in log space,
//! centred on spot. Expirations are the next eight Fridays followed by eight
//! quarterly (13-week) Fridays.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::{
    QUARTERLY_EXPIRIES, STRIKES_PER_SIDE, WEEKLY_EXPIRIES, WEEKS_PER_QUARTER, WEEKS_PER_YEAR,
};
use crate::core::calendar::{add_days, add_weeks, days_to_next_friday};
use crate::core::{ModelError, ModelResult};

/// Strike ladder: `spot · exp(k · vol / sqrt(52))` for k = -3..=3
pub fn strike_ladder(spot: f64, annual_volatility: f64) -> ModelResult<Vec<f64>> {
    if !(spot.is_finite() && spot > 0.0) {
        return Err(ModelError::computation(format!("Spot must be positive, got {}", spot)));
    }
    if !(annual_volatility.is_finite() && annual_volatility >= 0.0) {
        return Err(ModelError::computation(format!(
            "Volatility must be non-negative, got {}",
            annual_volatility
        )));
    }

    let step = annual_volatility / (WEEKS_PER_YEAR as f64).sqrt();
    Ok((-STRIKES_PER_SIDE..=STRIKES_PER_SIDE)
        .map(|k| spot * (f64::from(k) * step).exp())
        .collect())
}

/// Expiration ladder as seen from `today`
pub fn expiration_ladder(today: NaiveDate) -> Vec<NaiveDate> {
    let first_weekly = add_days(today, days_to_next_friday(today.weekday()));

    let mut expirations: Vec<NaiveDate> = (0..WEEKLY_EXPIRIES as i64)
        .map(|i| add_weeks(first_weekly, i))
        .collect();

    let last_weekly = add_weeks(first_weekly, WEEKLY_EXPIRIES as i64 - 1);
    let first_quarterly = add_weeks(last_weekly, WEEKS_PER_QUARTER - WEEKLY_EXPIRIES as i64);
    expirations.extend(
        (0..QUARTERLY_EXPIRIES as i64).map(|i| add_weeks(first_quarterly, i * WEEKS_PER_QUARTER)),
    );

    expirations
}

/// Strike × expiration grid to price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingLadder {
    pub strikes: Vec<f64>,
    pub expirations: Vec<NaiveDate>,
}

impl PricingLadder {
    pub fn build(spot: f64, annual_volatility: f64, today: NaiveDate) -> ModelResult<Self> {
        Ok(Self {
            strikes: strike_ladder(spot, annual_volatility)?,
            expirations: expiration_ladder(today),
        })
    }

    /// Number of (expiration, strike) pairs
    pub fn len(&self) -> usize {
        self.strikes.len() * self.expirations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
