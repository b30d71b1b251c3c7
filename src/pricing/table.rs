//! Option price table
//!
//! Prices every (expiration, strike) pair of the ladder with Black-Scholes.
//! Time to maturity is business days from today over the trading days per
//! year; weekends are skipped but market holidays are not.

use chrono::NaiveDate;
use ndarray::Array2;
use serde::Serialize;

use crate::config::PricingConfig;
use crate::core::calendar::business_days_until;
use crate::core::{ModelResult, PriceRow, StockModelSnapshot};
use crate::models::black_scholes::call_put;

use super::ladder::PricingLadder;
use super::rounding::{round_price, round_strike};

/// Call and put prices over the ladder, indexed `[expiration, strike]`
#[derive(Debug, Clone, Serialize)]
pub struct PriceTable {
    pub spot: f64,
    /// Continuously compounded risk-free force
    pub rate: f64,
    pub volatility: f64,
    pub today: NaiveDate,
    pub ladder: PricingLadder,
    /// Years to each expiration
    pub times: Vec<f64>,
    pub calls: Array2<f64>,
    pub puts: Array2<f64>,
}

impl PriceTable {
    /// Price the full ladder
    pub fn build(
        spot: f64,
        rate: f64,
        volatility: f64,
        today: NaiveDate,
        config: &PricingConfig,
    ) -> ModelResult<Self> {
        let ladder = PricingLadder::build(spot, volatility, today)?;
        let times: Vec<f64> = ladder
            .expirations
            .iter()
            .map(|&exp| time_to_maturity(today, exp, config))
            .collect();

        let shape = (ladder.expirations.len(), ladder.strikes.len());
        let mut calls = Array2::zeros(shape);
        let mut puts = Array2::zeros(shape);

        for (ei, &time) in times.iter().enumerate() {
            for (si, &strike) in ladder.strikes.iter().enumerate() {
                let (call, put) = call_put(spot, strike, rate, volatility, time)?;
                calls[[ei, si]] = call;
                puts[[ei, si]] = put;
            }
        }

        if volatility == 0.0 || times.iter().any(|&t| t == 0.0) {
            tracing::warn!(
                "Priced with zero volatility or zero time to maturity; deterministic values used"
            );
        }

        tracing::info!(
            "Priced {} options (spot {:.2}, rate {:.5}, vol {:.4})",
            2 * ladder.len(),
            spot,
            rate,
            volatility
        );

        Ok(Self {
            spot,
            rate,
            volatility,
            today,
            ladder,
            times,
            calls,
            puts,
        })
    }

    /// Price the ladder for a model snapshot's volatility
    pub fn for_snapshot(
        snapshot: &StockModelSnapshot,
        spot: f64,
        rate: f64,
        today: NaiveDate,
        config: &PricingConfig,
    ) -> ModelResult<Self> {
        Self::build(spot, rate, snapshot.annual_volatility(), today, config)
    }

    /// Rounded rows, expiration-major then strike
    pub fn rows(&self) -> Vec<PriceRow> {
        self.ladder
            .expirations
            .iter()
            .enumerate()
            .flat_map(|(ei, &expiration)| {
                self.ladder
                    .strikes
                    .iter()
                    .enumerate()
                    .map(move |(si, &strike)| PriceRow {
                        expiration,
                        strike: round_strike(strike),
                        call_price: round_price(self.calls[[ei, si]]),
                        put_price: round_price(self.puts[[ei, si]]),
                    })
            })
            .collect()
    }

    /// Unrounded call minus put less (spot - PV(strike)), worst case over the grid
    /// True when some entries come from the zero-volatility or
    /// zero-time limit instead of the closed form
    pub fn uses_deterministic_limit(&self) -> bool {
        self.volatility == 0.0 || self.times.iter().any(|&t| t == 0.0)
    }

    pub fn max_parity_error(&self) -> f64 {
        let mut worst: f64 = 0.0;
        for (ei, &time) in self.times.iter().enumerate() {
            for (si, &strike) in self.ladder.strikes.iter().enumerate() {
                let forward_gap = self.spot - strike * (-self.rate * time).exp();
                let err = (self.calls[[ei, si]] - self.puts[[ei, si]] - forward_gap).abs();
                worst = worst.max(err);
            }
        }
        worst
    }
}

/// Years from `today` to `expiration` on the business-day clock
pub fn time_to_maturity(today: NaiveDate, expiration: NaiveDate, config: &PricingConfig) -> f64 {
    f64::from(business_days_until(today, expiration)) / config.trading_days_per_year
}
