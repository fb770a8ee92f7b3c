//! # BS Options - Closed-Form European Option Pricing
//!
//! A small options pricing library implementing the Black-Scholes closed form
//! for European puts and calls, with the four first-order Greeks and a
//! self-contained polynomial approximation of the standard normal CDF.
//!
//! ## Key Components
//!
//! - **Normal Approximation**: Abramowitz & Stegun style CDF plus exact PDF
//! - **EuropeanOption**: Validated, immutable contract specification
//! - **BlackScholesEngine**: Derives d1/d2 once, answers premium/Greek queries,
//!   and supports strike repricing (set/increment/decrement)
//! - **Free functions**: One-shot `price`/`delta`/`gamma`/`vega`/`theta`
//!   wrappers over the engine
//!
//! ## Usage
//!
//! ```rust
//! use bs_options::prelude::*;
//!
//! let option = EuropeanOption::new(OptionType::Call, 110.70, 100.50, 0.55, 0.22, 0.0).unwrap();
//! let engine = BlackScholesEngine::new(option).unwrap();
//!
//! let premium = engine.premium();
//! let greeks = engine.greeks().unwrap();
//! assert!(premium > 0.0 && greeks.delta > 0.0);
//!
//! // One-shot convenience call
//! let put = bs_price(110.70, 100.50, 0.0, 0.22, 0.55, OptionType::Put).unwrap();
//! assert!(put < premium);
//! ```
//!
//! ## What This Library Does
//!
//! - Prices European vanilla options under Black-Scholes
//! - Computes delta, gamma, vega and theta in closed form
//! - Handles the degenerate branches (zero volatility, zero expiry,
//!   distribution-tail saturation) explicitly
//! - Reports invalid inputs and undefined derivatives as recoverable errors
//!
//! ## What This Library Does NOT Do
//!
//! - American exercise or early-exercise boundaries
//! - Implied volatility solving
//! - Multi-asset, barrier or path-dependent payoffs
//! - Numerical engines (PDE, Monte Carlo, trees)

pub mod core;
pub mod models;
pub mod pricing;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{EuropeanOption, Greeks, OptionType, PricingError, PricingResult};

    // Models
    pub use crate::models::{
        delta as bs_delta,
        gamma as bs_gamma,
        greeks as bs_greeks,
        norm_cdf,
        norm_pdf,
        price as bs_price,
        theta as bs_theta,
        vega as bs_vega,
    };

    // Pricing engine
    pub use crate::pricing::BlackScholesEngine;
}

// Re-export main types at crate root
pub use crate::core::{PricingError, PricingResult};
pub use crate::pricing::BlackScholesEngine;
