//! Decimal rounding of table values (round half to even)

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Round to `dp` decimal places, ties to even.
///
/// The value is read through its shortest decimal form first, so 0.125
/// rounds to 0.12 and 2.675 rounds to 2.68. Non-finite values pass through.
pub fn round_half_even(value: f64, dp: u32) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Strike precision in the price table
pub fn round_strike(strike: f64) -> f64 {
    round_half_even(strike, 2)
}

/// Option price precision in the price table
pub fn round_price(price: f64) -> f64 {
    round_half_even(price, 4)
}
