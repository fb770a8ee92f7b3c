//! Core data types for bs-options
//!
//! Defines fundamental types:
//! - EuropeanOption: Spot, strike, expiry, volatility, rate, type (call/put)
//! - Greeks: Delta, gamma, theta, vega
//! - PricingError: Crate-wide error type

pub mod error;
pub mod greeks;
pub mod option;

pub use error::*;
pub use greeks::*;
pub use option::*;
