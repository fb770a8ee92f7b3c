//! Black-Scholes pricing engine
//!
//! Stateful engine owning a validated [`EuropeanOption`] together with the
//! cached d1/d2 intermediates. Every closed-form formula lives here; the free
//! functions in [`crate::models::black_scholes`] forward to this engine.

use crate::core::{EuropeanOption, Greeks, OptionType, PricingError, PricingResult};
use crate::models::normal::{norm_cdf, norm_pdf};

/// Closed-form Black-Scholes engine for European vanilla options.
///
/// The intermediates satisfy
/// `d1 = (ln(S/K) + T·σ²/2) / (σ·√T)` and `d2 = d1 − σ·√T`; they are absent
/// when volatility or expiry is zero, since the derivation divides by `σ·√T`.
/// Note the rate enters only through the discount factor, not through d1.
#[derive(Debug, Clone)]
pub struct BlackScholesEngine {
    option: EuropeanOption,
    d1: Option<f64>,
    d2: Option<f64>,
}

impl BlackScholesEngine {
    /// Create an engine for a specification, deriving the intermediates once.
    pub fn new(option: EuropeanOption) -> PricingResult<Self> {
        option.validate()?;
        let (d1, d2) = Self::terms(&option);
        Ok(Self { option, d1, d2 })
    }

    fn terms(option: &EuropeanOption) -> (Option<f64>, Option<f64>) {
        if option.volatility > 0.0 && option.expiry > 0.0 {
            let vol_sqrt_t = option.volatility * option.expiry.sqrt();
            let d1 = ((option.spot / option.strike).ln()
                + option.expiry * option.volatility * option.volatility / 2.0)
                / vol_sqrt_t;
            (Some(d1), Some(d1 - vol_sqrt_t))
        } else {
            (None, None)
        }
    }

    /// The specification this engine prices
    pub fn option(&self) -> &EuropeanOption {
        &self.option
    }

    /// d1 intermediate, absent at zero volatility or zero expiry
    pub fn d1(&self) -> Option<f64> {
        self.d1
    }

    /// d2 intermediate, absent at zero volatility or zero expiry
    pub fn d2(&self) -> Option<f64> {
        self.d2
    }

    fn discount(&self) -> f64 {
        (-self.option.rate * self.option.expiry).exp()
    }

    /// Theoretical option premium.
    ///
    /// With zero volatility or zero expiry the premium collapses to the
    /// discounted intrinsic value (the deterministic payoff limit, which the
    /// distribution tails also converge to).
    pub fn premium(&self) -> f64 {
        let o = &self.option;
        let df = self.discount();
        match (self.d1, self.d2) {
            (Some(d1), Some(d2)) => match o.option_type {
                OptionType::Call => df * (o.spot * norm_cdf(d1) - o.strike * norm_cdf(d2)),
                OptionType::Put => df * (o.strike * norm_cdf(-d2) - o.spot * norm_cdf(-d1)),
            },
            _ => df * o.intrinsic(),
        }
    }

    /// Premium sensitivity to spot.
    ///
    /// At zero expiry this is the terminal payoff slope and needs no
    /// distribution call; at zero volatility with time remaining d1 is
    /// undefined and the query fails.
    pub fn delta(&self) -> PricingResult<f64> {
        let o = &self.option;
        if o.expiry == 0.0 {
            return Ok(match o.option_type {
                OptionType::Call => {
                    if o.spot > o.strike {
                        1.0
                    } else {
                        0.0
                    }
                }
                OptionType::Put => {
                    if o.spot < o.strike {
                        -1.0
                    } else {
                        0.0
                    }
                }
            });
        }
        let d1 = self
            .d1
            .ok_or_else(|| PricingError::undefined("delta requires non-zero volatility"))?;
        let df = self.discount();
        Ok(match o.option_type {
            OptionType::Call => df * norm_cdf(d1),
            OptionType::Put => df * (norm_cdf(d1) - 1.0),
        })
    }

    /// Delta sensitivity to spot (same closed form for calls and puts).
    pub fn gamma(&self) -> PricingResult<f64> {
        let o = &self.option;
        let d1 = self.d1.ok_or_else(|| {
            PricingError::undefined("gamma requires non-zero volatility and expiry")
        })?;
        Ok(self.discount() * norm_pdf(d1) / (o.spot * o.volatility * o.expiry.sqrt()))
    }

    /// Premium sensitivity to volatility (same closed form for calls and puts).
    pub fn vega(&self) -> PricingResult<f64> {
        let o = &self.option;
        let d1 = self.d1.ok_or_else(|| {
            PricingError::undefined("vega requires non-zero volatility and expiry")
        })?;
        Ok(self.discount() * norm_pdf(d1) * o.spot * o.expiry.sqrt())
    }

    /// Premium sensitivity to the passage of time.
    pub fn theta(&self) -> PricingResult<f64> {
        let o = &self.option;
        let (d1, d2) = match (self.d1, self.d2) {
            (Some(d1), Some(d2)) => (d1, d2),
            _ => {
                return Err(PricingError::undefined(
                    "theta requires non-zero volatility and expiry",
                ))
            }
        };
        let df = self.discount();
        let decay = -o.spot * norm_pdf(d1) * o.volatility * df / (2.0 * o.expiry.sqrt());
        Ok(match o.option_type {
            OptionType::Call => {
                decay + o.rate * o.spot * norm_cdf(d1) * df - o.rate * o.strike * df * norm_cdf(d2)
            }
            OptionType::Put => {
                decay - o.rate * o.spot * norm_cdf(-d1) * df
                    + o.rate * o.strike * df * norm_cdf(-d2)
            }
        })
    }

    /// All four sensitivities in one call
    pub fn greeks(&self) -> PricingResult<Greeks> {
        Ok(Greeks::new(
            self.delta()?,
            self.gamma()?,
            self.theta()?,
            self.vega()?,
        ))
    }

    /// Reprice at a new strike, returning the fresh premium.
    ///
    /// Replaces the held specification and recomputes the intermediates;
    /// premiums and Greeks returned before the call are not updated.
    pub fn set_strike(&mut self, strike: f64) -> PricingResult<f64> {
        self.option = self.option.with_strike(strike)?;
        let (d1, d2) = Self::terms(&self.option);
        self.d1 = d1;
        self.d2 = d2;
        Ok(self.premium())
    }

    /// Raise the strike by one unit and return the fresh premium
    pub fn increment_strike(&mut self) -> PricingResult<f64> {
        self.set_strike(self.option.strike + 1.0)
    }

    /// Lower the strike by one unit and return the fresh premium.
    ///
    /// Fails with [`PricingError::StrikeUnderflow`] instead of crossing zero.
    pub fn decrement_strike(&mut self) -> PricingResult<f64> {
        let strike = self.option.strike - 1.0;
        if strike < 0.0 {
            return Err(PricingError::StrikeUnderflow(self.option.strike));
        }
        self.set_strike(strike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn reference_call() -> BlackScholesEngine {
        let option =
            EuropeanOption::new(OptionType::Call, 110.70, 100.50, 0.55, 0.22, 0.0).unwrap();
        BlackScholesEngine::new(option).unwrap()
    }

    #[test]
    fn test_reference_intermediates() {
        let engine = reference_call();
        assert_relative_eq!(engine.d1().unwrap(), 0.6740534520900516, epsilon = 1e-12);
        assert_relative_eq!(engine.d2().unwrap(), 0.5108970853739471, epsilon = 1e-12);
    }

    #[test]
    fn test_reference_premium_and_greeks() {
        let engine = reference_call();
        assert_relative_eq!(engine.premium(), 13.132421848642082, epsilon = 1e-9);
        assert_relative_eq!(engine.delta().unwrap(), 0.7498944900226499, epsilon = 1e-9);
        assert_relative_eq!(engine.gamma().unwrap(), 0.017599405286496145, epsilon = 1e-9);
        assert_relative_eq!(engine.vega().unwrap(), 26.09628006680701, epsilon = 1e-9);
        assert_relative_eq!(engine.theta().unwrap(), -5.219256013361402, epsilon = 1e-9);
    }

    #[test]
    fn test_reference_put() {
        let option =
            EuropeanOption::new(OptionType::Put, 110.70, 100.50, 0.55, 0.22, 0.0).unwrap();
        let engine = BlackScholesEngine::new(option).unwrap();
        assert_relative_eq!(engine.premium(), 2.9324218486420826, epsilon = 1e-9);
        assert_relative_eq!(engine.delta().unwrap(), -0.25010550997735015, epsilon = 1e-9);
    }

    #[test]
    fn test_theta_with_rate() {
        let call = BlackScholesEngine::new(
            EuropeanOption::new(OptionType::Call, 110.70, 100.50, 0.55, 0.22, 0.05).unwrap(),
        )
        .unwrap();
        let put = BlackScholesEngine::new(
            EuropeanOption::new(OptionType::Put, 110.70, 100.50, 0.55, 0.22, 0.05).unwrap(),
        )
        .unwrap();
        assert_relative_eq!(call.theta().unwrap(), -4.438872000306395, epsilon = 1e-9);
        assert_relative_eq!(put.theta().unwrap(), -4.935038088408657, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_volatility_premium() {
        // Deterministic payoff limit: discounted intrinsic value only
        let put = BlackScholesEngine::new(
            EuropeanOption::new(OptionType::Put, 90.0, 100.0, 0.5, 0.0, 0.05).unwrap(),
        )
        .unwrap();
        assert!(put.d1().is_none());
        assert_relative_eq!(put.premium(), 10.0 * (-0.025f64).exp(), epsilon = 1e-12);

        let call = BlackScholesEngine::new(
            EuropeanOption::new(OptionType::Call, 110.0, 100.0, 0.5, 0.0, 0.05).unwrap(),
        )
        .unwrap();
        assert_relative_eq!(call.premium(), 10.0 * (-0.025f64).exp(), epsilon = 1e-12);

        // Out of the money: nothing left but time value, and there is none
        let otm = BlackScholesEngine::new(
            EuropeanOption::new(OptionType::Call, 90.0, 100.0, 0.5, 0.0, 0.05).unwrap(),
        )
        .unwrap();
        assert_eq!(otm.premium(), 0.0);
    }

    #[test]
    fn test_zero_expiry_premium() {
        let engine = BlackScholesEngine::new(
            EuropeanOption::new(OptionType::Call, 110.0, 100.0, 0.0, 0.22, 0.05).unwrap(),
        )
        .unwrap();
        assert!(engine.d1().is_none());
        assert_eq!(engine.premium(), 10.0);
    }

    #[test]
    fn test_zero_expiry_delta() {
        let cases = [
            (OptionType::Put, 90.0, 100.0, -1.0),
            (OptionType::Put, 110.0, 100.0, 0.0),
            (OptionType::Put, 100.0, 100.0, 0.0),
            (OptionType::Call, 110.0, 100.0, 1.0),
            (OptionType::Call, 90.0, 100.0, 0.0),
            (OptionType::Call, 100.0, 100.0, 0.0),
        ];
        for (option_type, spot, strike, expected) in cases {
            let engine = BlackScholesEngine::new(
                EuropeanOption::new(option_type, spot, strike, 0.0, 0.22, 0.0).unwrap(),
            )
            .unwrap();
            assert_eq!(engine.delta().unwrap(), expected);
        }
    }

    #[test]
    fn test_undefined_derivatives() {
        let zero_vol = BlackScholesEngine::new(
            EuropeanOption::new(OptionType::Call, 100.0, 100.0, 1.0, 0.0, 0.0).unwrap(),
        )
        .unwrap();
        assert!(matches!(
            zero_vol.delta(),
            Err(PricingError::UndefinedDerivative(_))
        ));
        assert!(matches!(
            zero_vol.gamma(),
            Err(PricingError::UndefinedDerivative(_))
        ));

        let zero_expiry = BlackScholesEngine::new(
            EuropeanOption::new(OptionType::Put, 100.0, 100.0, 0.0, 0.2, 0.0).unwrap(),
        )
        .unwrap();
        assert!(matches!(
            zero_expiry.gamma(),
            Err(PricingError::UndefinedDerivative(_))
        ));
        assert!(matches!(
            zero_expiry.vega(),
            Err(PricingError::UndefinedDerivative(_))
        ));
        assert!(matches!(
            zero_expiry.theta(),
            Err(PricingError::UndefinedDerivative(_))
        ));
    }

    #[test]
    fn test_greeks_aggregate() {
        let engine = reference_call();
        let greeks = engine.greeks().unwrap();
        assert_eq!(greeks.delta, engine.delta().unwrap());
        assert_eq!(greeks.gamma, engine.gamma().unwrap());
        assert_eq!(greeks.theta, engine.theta().unwrap());
        assert_eq!(greeks.vega, engine.vega().unwrap());
    }

    #[test]
    fn test_strike_mutation_round_trip() {
        let mut engine = reference_call();
        let original = engine.premium();

        let up = engine.increment_strike().unwrap();
        assert_eq!(engine.option().strike, 101.50);
        assert!(up < original);

        let back = engine.decrement_strike().unwrap();
        assert_eq!(engine.option().strike, 100.50);
        assert_abs_diff_eq!(back, original, epsilon = 1e-15);
        assert_relative_eq!(engine.d1().unwrap(), 0.6740534520900516, epsilon = 1e-12);
    }

    #[test]
    fn test_set_strike() {
        let mut engine = reference_call();
        let repriced = engine.set_strike(99.0).unwrap();
        assert_eq!(engine.option().strike, 99.0);
        assert!(repriced > 13.132421848642082);

        assert!(matches!(
            engine.set_strike(-1.0),
            Err(PricingError::InvalidInput(_))
        ));
        // Failed mutation leaves the engine untouched
        assert_eq!(engine.option().strike, 99.0);
    }

    #[test]
    fn test_decrement_underflow() {
        let mut engine = BlackScholesEngine::new(
            EuropeanOption::new(OptionType::Call, 100.0, 0.5, 1.0, 0.2, 0.0).unwrap(),
        )
        .unwrap();
        let err = engine.decrement_strike().unwrap_err();
        assert!(matches!(err, PricingError::StrikeUnderflow(_)));
        assert_eq!(engine.option().strike, 0.5);
    }

    #[test]
    fn test_gamma_vega_positive() {
        let engine = reference_call();
        assert!(engine.gamma().unwrap() > 0.0);
        assert!(engine.vega().unwrap() > 0.0);
    }
}
