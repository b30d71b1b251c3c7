//! Option price ladder
//!
//! Strike/expiration grid construction, risk-free force derivation and the
//! Black-Scholes price table over the grid.

pub mod ladder;
pub mod rates;
pub mod rounding;
pub mod table;

pub use ladder::*;
pub use rates::risk_free_force;
pub use rounding::*;
pub use table::*;
