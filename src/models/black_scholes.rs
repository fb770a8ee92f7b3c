//! Black-Scholes free-function surface
//!
//! Convenience wrappers for one-shot queries. Each call validates the inputs,
//! builds a [`BlackScholesEngine`] and forwards to it, so the closed forms
//! exist in exactly one place.

use crate::core::{EuropeanOption, Greeks, OptionType, PricingResult};
use crate::pricing::BlackScholesEngine;

fn engine(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> PricingResult<BlackScholesEngine> {
    let option = EuropeanOption::new(option_type, spot, strike, time, vol, rate)?;
    BlackScholesEngine::new(option)
}

/// Black-Scholes European option premium
pub fn price(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> PricingResult<f64> {
    Ok(engine(spot, strike, rate, vol, time, option_type)?.premium())
}

/// Black-Scholes delta
pub fn delta(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> PricingResult<f64> {
    engine(spot, strike, rate, vol, time, option_type)?.delta()
}

/// Black-Scholes gamma
pub fn gamma(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> PricingResult<f64> {
    engine(spot, strike, rate, vol, time, option_type)?.gamma()
}

/// Black-Scholes vega
pub fn vega(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> PricingResult<f64> {
    engine(spot, strike, rate, vol, time, option_type)?.vega()
}

/// Black-Scholes theta
pub fn theta(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> PricingResult<f64> {
    engine(spot, strike, rate, vol, time, option_type)?.theta()
}

/// All four Black-Scholes sensitivities
pub fn greeks(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> PricingResult<Greeks> {
    engine(spot, strike, rate, vol, time, option_type)?.greeks()
}
