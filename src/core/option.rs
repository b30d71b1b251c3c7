//! Option contract types
//!
//! European calls and puts, and the priced table row produced for each
//! (expiration, strike) pair of the ladder.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        (self.phi() * (spot - strike)).max(0.0)
    }
}

/// One row of the option price table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    /// Expiration date (a Friday)
    pub expiration: NaiveDate,
    /// Strike, rounded to 2 decimals
    pub strike: f64,
    /// European call price, rounded to 4 decimals
    pub call_price: f64,
    /// European put price, rounded to 4 decimals
    pub put_price: f64,
}

impl PriceRow {
    pub fn price(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call_price,
            OptionType::Put => self.put_price,
        }
    }
}
