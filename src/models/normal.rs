//! Standard normal distribution approximations
//!
//! Self-contained CDF/PDF pair used by all closed-form pricing code. The CDF
//! is the Abramowitz & Stegun 26.2.17 rational approximation with truncated
//! four-decimal coefficients, good to about 1e-4 across the whole real line.
//! The evaluation order of the Horner polynomial is deliberately fixed so that
//! results are bit-for-bit reproducible.

use std::f64::consts::PI;

// Truncated Abramowitz & Stegun 26.2.17 coefficients
const B1: f64 = 0.3193;
const B2: f64 = -0.3565;
const B3: f64 = 1.7814;
const B4: f64 = -1.8212;
const B5: f64 = 1.3302;
const P: f64 = 0.2316;
const C2: f64 = 0.3989;

/// Standard normal CDF approximation
///
/// Saturates to exactly 1.0 above +6 and exactly 0.0 below -6.
pub fn norm_cdf(x: f64) -> f64 {
    if x > 6.0 {
        return 1.0;
    }
    if x < -6.0 {
        return 0.0;
    }

    let a = x.abs();
    let t = 1.0 / (1.0 + a * P);
    let b = C2 * (-0.5 * x * x).exp();
    let poly = ((((B5 * t + B4) * t + B3) * t + B2) * t + B1) * t;
    let n = 1.0 - b * poly;

    if x < 0.0 {
        1.0 - n
    } else {
        n
    }
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}
