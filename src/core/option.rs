//! Option contract definitions
//!
//! Represents a vanilla European option with validated market parameters.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{PricingError, PricingResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> PricingResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(PricingError::invalid_option_type(other)),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// European option specification
///
/// An immutable value type: construction validates the inputs, and
/// [`with_strike`](EuropeanOption::with_strike) produces a fresh validated
/// specification instead of mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EuropeanOption {
    /// Option type (Call/Put)
    pub option_type: OptionType,
    /// Underlying spot price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiry in years
    pub expiry: f64,
    /// Annualized volatility
    pub volatility: f64,
    /// Continuously compounded interest rate (no sign constraint)
    pub rate: f64,
}

impl EuropeanOption {
    /// Create a new validated specification
    pub fn new(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        expiry: f64,
        volatility: f64,
        rate: f64,
    ) -> PricingResult<Self> {
        let option = Self {
            option_type,
            spot,
            strike,
            expiry,
            volatility,
            rate,
        };
        option.validate()?;
        Ok(option)
    }

    /// Create a specification from a calendar expiry date
    pub fn expiring_on(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        expiry: NaiveDate,
        as_of: NaiveDate,
        volatility: f64,
        rate: f64,
    ) -> PricingResult<Self> {
        let days = (expiry - as_of).num_days();
        Self::new(option_type, spot, strike, days as f64 / 365.25, volatility, rate)
    }

    /// Check the non-negativity invariant on spot, strike, expiry and volatility
    pub fn validate(&self) -> PricingResult<()> {
        if self.spot < 0.0 || self.strike < 0.0 || self.expiry < 0.0 || self.volatility < 0.0 {
            return Err(PricingError::invalid_input(format!(
                "spot ({}), strike ({}), expiry ({}) and volatility ({}) must be non-negative",
                self.spot, self.strike, self.expiry, self.volatility
            )));
        }
        Ok(())
    }

    /// New specification with a different strike, all other fields unchanged
    pub fn with_strike(self, strike: f64) -> PricingResult<Self> {
        Self::new(
            self.option_type,
            self.spot,
            strike,
            self.expiry,
            self.volatility,
            self.rate,
        )
    }

    /// Intrinsic value at the current spot
    pub fn intrinsic(&self) -> f64 {
        self.option_type.intrinsic(self.spot, self.strike)
    }

    /// Is this option in the money?
    pub fn is_itm(&self) -> bool {
        match self.option_type {
            OptionType::Call => self.spot > self.strike,
            OptionType::Put => self.spot < self.strike,
        }
    }
}
