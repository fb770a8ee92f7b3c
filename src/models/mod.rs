//! Numeric model layer
//!
//! Implements:
//! - Normal approximation (polynomial CDF, exact PDF)
//! - Black-Scholes free-function pricing surface

pub mod black_scholes;
pub mod normal;

pub use black_scholes::*;
pub use normal::*;
