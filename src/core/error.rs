//! Error types for bs-options

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown option type: {0}")]
    InvalidOptionType(String),

    #[error("Undefined derivative: {0}")]
    UndefinedDerivative(String),

    #[error("Strike underflow: cannot decrement strike {0} below zero")]
    StrikeUnderflow(f64),
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_option_type(msg: impl Into<String>) -> Self {
        Self::InvalidOptionType(msg.into())
    }

    pub fn undefined(msg: impl Into<String>) -> Self {
        Self::UndefinedDerivative(msg.into())
    }
}
