//! Black-Scholes Model
//!
//! Provides:
//! - European call pricing in closed form
//! - Put pricing through put-call parity
//!
//! No dividends. `rate` is the continuously compounded risk-free force and
//! `time` is in years.
//!
//! Degenerate inputs follow the deterministic limit instead of dividing by
//! zero: at `time == 0` the call is worth its intrinsic value, and with
//! `vol == 0` it is worth `max(S - K·e^(-rT), 0)`. The put always comes from
//! parity, so `call - put == S - K·e^(-rT)` holds in every case.

use std::f64::consts::SQRT_2;

use statrs::function::erf::erfc;

use crate::core::{ModelError, ModelResult, OptionType};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    d1(spot, strike, rate, vol, time) - vol * time.sqrt()
}

/// Present value of the strike, K·e^(-rT)
pub fn discounted_strike(strike: f64, rate: f64, time: f64) -> f64 {
    strike * (-rate * time).exp()
}

fn check_inputs(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> ModelResult<()> {
    if !(spot.is_finite() && spot > 0.0) {
        return Err(ModelError::computation(format!("Spot must be positive, got {}", spot)));
    }
    if !(strike.is_finite() && strike > 0.0) {
        return Err(ModelError::computation(format!("Strike must be positive, got {}", strike)));
    }
    if !rate.is_finite() {
        return Err(ModelError::computation(format!("Risk-free force is not finite: {}", rate)));
    }
    if !(vol.is_finite() && vol >= 0.0) {
        return Err(ModelError::computation(format!("Volatility must be non-negative, got {}", vol)));
    }
    if !(time.is_finite() && time >= 0.0) {
        return Err(ModelError::computation(format!("Time to maturity must be non-negative, got {}", time)));
    }
    Ok(())
}

/// European call price
pub fn call_price(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> ModelResult<f64> {
    check_inputs(spot, strike, rate, vol, time)?;

    if time == 0.0 {
        tracing::debug!("Zero time to maturity at strike {:.4}; using intrinsic value", strike);
        return Ok(OptionType::Call.intrinsic(spot, strike));
    }

    let pv_strike = discounted_strike(strike, rate, time);

    if vol == 0.0 {
        tracing::debug!("Zero volatility at strike {:.4}; using deterministic value", strike);
        return Ok((spot - pv_strike).max(0.0));
    }

    let nd2 = norm_cdf(d2(spot, strike, rate, vol, time));
    let nd1 = norm_cdf(d1(spot, strike, rate, vol, time));

    Ok(nd1 * spot - nd2 * pv_strike)
}

/// European put price from the call via put-call parity
pub fn put_from_call(call: f64, spot: f64, strike: f64, rate: f64, time: f64) -> f64 {
    call - spot + discounted_strike(strike, rate, time)
}

/// Call and put prices for one (strike, maturity) pair
pub fn call_put(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> ModelResult<(f64, f64)> {
    let call = call_price(spot, strike, rate, vol, time)?;
    Ok((call, put_from_call(call, spot, strike, rate, time)))
}

/// Black-Scholes European option price
pub fn price(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> ModelResult<f64> {
    let (call, put) = call_put(spot, strike, rate, vol, time)?;
    Ok(match option_type {
        OptionType::Call => call,
        OptionType::Put => put,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_cdf() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
        assert!((norm_cdf(1.959963985) - 0.975).abs() < 1e-9);
        assert!((norm_cdf(-1.959963985) - 0.025).abs() < 1e-9);
        assert!((norm_cdf(1.0) + norm_cdf(-1.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_bs_price() {
        // ATM, 20% vol, 1 year, 3% effective annual rate
        let rate = 1.03_f64.ln();
        let (call, put) = call_put(100.0, 100.0, rate, 0.20, 1.0).unwrap();

        assert!((call - 9.3912).abs() < 5e-5, "call {}", call);
        assert!((put - 6.4785).abs() < 5e-5, "put {}", put);
    }

    #[test]
    fn test_d1_d2_spacing() {
        let (s, k, r, v, t) = (100.0, 110.0, 0.03, 0.25, 0.75);
        assert!((d1(s, k, r, v, t) - d2(s, k, r, v, t) - v * t.sqrt()).abs() < 1e-15);
        // ATM with zero rate: d1 = v√t/2 and d2 = -v√t/2
        assert!((d1(s, s, 0.0, v, 1.0) - 0.125).abs() < 1e-15);
        assert!((d2(s, s, 0.0, v, 1.0) + 0.125).abs() < 1e-15);
    }

    #[test]
    fn test_put_call_parity() {
        let rate = 0.04;
        for &strike in &[80.0, 95.0, 100.0, 105.0, 130.0] {
            for &time in &[0.02, 0.25, 1.0, 2.0] {
                let (call, put) = call_put(100.0, strike, rate, 0.3, time).unwrap();
                let parity = call - put - (100.0 - strike * (-rate * time).exp());
                assert!(parity.abs() < 1e-10);
                assert!(call >= 0.0);
                assert!(put >= -1e-12);
            }
        }
    }

    #[test]
    fn test_zero_time_is_intrinsic() {
        assert_eq!(call_price(110.0, 100.0, 0.05, 0.2, 0.0).unwrap(), 10.0);
        assert_eq!(price(90.0, 100.0, 0.05, 0.2, 0.0, OptionType::Put).unwrap(), 10.0);
        assert_eq!(price(110.0, 100.0, 0.05, 0.2, 0.0, OptionType::Put).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_vol_is_deterministic_limit() {
        let rate = 0.05;
        let pv = 100.0 * (-rate * 0.5_f64).exp();
        let (call, put) = call_put(100.0, 100.0, rate, 0.0, 0.5).unwrap();
        assert!((call - (100.0 - pv)).abs() < 1e-12);
        assert!(put.abs() < 1e-12);

        // Approaches the same limit from tiny volatility
        let near = call_price(100.0, 100.0, rate, 1e-6, 0.5).unwrap();
        assert!((near - call).abs() < 1e-4);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(call_price(0.0, 100.0, 0.05, 0.2, 1.0).is_err());
        assert!(call_price(100.0, -1.0, 0.05, 0.2, 1.0).is_err());
        assert!(call_price(100.0, 100.0, f64::NAN, 0.2, 1.0).is_err());
        assert!(call_price(100.0, 100.0, 0.05, -0.2, 1.0).is_err());
        assert!(call_price(100.0, 100.0, 0.05, 0.2, -1.0).is_err());
    }

    #[test]
    fn test_monotone_in_strike() {
        let calls: Vec<f64> = [90.0, 100.0, 110.0]
            .iter()
            .map(|&k| call_price(100.0, k, 0.03, 0.25, 0.5).unwrap())
            .collect();
        assert!(calls[0] > calls[1] && calls[1] > calls[2]);
    }
}
