//! Interpolation of the value at the origin from surrounding samples.
//!
//! f(0) ≈ Σᵢ cᵢ f(aᵢ h)
//!
//! The stencil must not contain the origin itself.

use fdx_core::Expr;
use fdx_integers::{Integer, Rational};

use crate::config::{Config, EquationOptions};
use crate::coords::{unknowns, SubscriptStyle};
use crate::equation;
use crate::error::Result;
use crate::finite_difference::raw_weights;
use crate::rationalize::{rationalize, rationalize_numer_denom};
use crate::stencil::Stencil;
use crate::truncation::{leading_error, LeadingErrorTerm};

/// Interpolation weights in ascending stencil order.
///
/// # Errors
///
/// Returns a validation error for a bad stencil, including one that
/// contains 0.
pub fn coefficients(stencil: &Stencil) -> Result<Vec<Rational>> {
    coefficients_with(&Config::default(), stencil)
}

/// [`coefficients`] with an explicit configuration.
///
/// # Errors
///
/// See [`coefficients`].
pub fn coefficients_with(config: &Config, stencil: &Stencil) -> Result<Vec<Rational>> {
    let _span = tracing::debug_span!("interpolation", width = stencil.len()).entered();
    let sorted = stencil.validate_for_interpolation(config)?;
    rationalize(&raw_weights(&sorted, 0, config)?)
}

/// Integer numerators of the weights and their common denominator.
///
/// # Errors
///
/// See [`coefficients`].
pub fn coefficients_numer_denom(stencil: &Stencil) -> Result<(Vec<Integer>, Integer)> {
    coefficients_numer_denom_with(&Config::default(), stencil)
}

/// [`coefficients_numer_denom`] with an explicit configuration.
///
/// # Errors
///
/// See [`coefficients`].
pub fn coefficients_numer_denom_with(config: &Config, stencil: &Stencil) -> Result<(Vec<Integer>, Integer)> {
    let _span = tracing::debug_span!("interpolation", width = stencil.len()).entered();
    let sorted = stencil.validate_for_interpolation(config)?;
    rationalize_numer_denom(&raw_weights(&sorted, 0, config)?)
}

/// The interpolation formula with terms ordered by stencil offset.
///
/// # Errors
///
/// See [`coefficients`].
pub fn equation(stencil: &Stencil) -> Result<Expr> {
    equation_with(&Config::default(), stencil, EquationOptions::default())
}

/// [`equation`] with an explicit configuration and options.
///
/// # Errors
///
/// See [`coefficients`].
pub fn equation_with(config: &Config, stencil: &Stencil, options: EquationOptions) -> Result<Expr> {
    let _span = tracing::debug_span!("interpolation", width = stencil.len()).entered();
    let sorted = stencil.validate_for_interpolation(config)?;
    let (numerators, denominator) = rationalize_numer_denom(&raw_weights(&sorted, 0, config)?)?;
    let symbols = unknowns(&sorted, &config.function, SubscriptStyle::StencilOffset);
    equation::build(&numerators, &denominator, &symbols, 0, &config.spacing, options)
}

/// Leading interpolation error.
///
/// # Errors
///
/// See [`coefficients`]; additionally propagates internal errors from
/// [`leading_error`].
pub fn truncation_error(stencil: &Stencil) -> Result<LeadingErrorTerm> {
    truncation_error_with(&Config::default(), stencil)
}

/// [`truncation_error`] with an explicit configuration.
///
/// # Errors
///
/// See [`truncation_error`].
pub fn truncation_error_with(config: &Config, stencil: &Stencil) -> Result<LeadingErrorTerm> {
    let _span = tracing::debug_span!("interpolation", width = stencil.len()).entered();
    let sorted = stencil.validate_for_interpolation(config)?;
    let coefficients = rationalize(&raw_weights(&sorted, 0, config)?)?;
    leading_error(&coefficients, &sorted, 0, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    fn half_integers() -> Stencil {
        Stencil::from_f64s(&[-1.5, -0.5, 0.5, 1.5]).unwrap()
    }

    #[test]
    fn test_midpoint() {
        let stencil = Stencil::from_ints(&[-1, 1]);
        assert_eq!(coefficients(&stencil).unwrap(), vec![q(1, 2), q(1, 2)]);
        assert_eq!(equation(&stencil).unwrap().to_string(), "(f_{-1} + f_{1})/2");
        assert_eq!(truncation_error(&stencil).unwrap().to_string(), "-f^(2)*h**2/2");
    }

    #[test]
    fn test_half_integer_stencil() {
        let stencil = half_integers();
        assert_eq!(
            coefficients(&stencil).unwrap(),
            vec![q(-1, 16), q(9, 16), q(9, 16), q(-1, 16)]
        );
        let (n, d) = coefficients_numer_denom(&stencil).unwrap();
        let n: Vec<i64> = n.iter().map(|v| v.to_i64().unwrap()).collect();
        assert_eq!((n, d.to_i64().unwrap()), (vec![-1, 9, 9, -1], 16));
        assert_eq!(truncation_error(&stencil).unwrap().to_string(), "3*f^(4)*h**4/128");
        assert_eq!(
            equation(&stencil).unwrap().to_string(),
            "(-f_{-1.5} + 9*f_{-0.5} + 9*f_{0.5} - f_{1.5})/16"
        );
    }

    #[test]
    fn test_wide_stencil() {
        let c = coefficients(&Stencil::from_ints(&[-2, -1, 1, 2])).unwrap();
        assert_eq!(c, vec![q(-1, 6), q(2, 3), q(2, 3), q(-1, 6)]);
    }

    #[test]
    fn test_extrapolation() {
        assert_eq!(coefficients(&Stencil::from_ints(&[1, 2])).unwrap(), vec![q(2, 1), q(-1, 1)]);
        assert_eq!(
            coefficients(&Stencil::from_ints(&[1, 2, 3])).unwrap(),
            vec![q(3, 1), q(-3, 1), q(1, 1)]
        );
        assert_eq!(
            equation(&Stencil::from_ints(&[1, 2])).unwrap().to_string(),
            "2*f_{1} - f_{2}"
        );
    }

    #[test]
    fn test_backward_extrapolation_reversed() {
        let eq = equation(&Stencil::from_ints(&[-3, -2, -1])).unwrap();
        assert_eq!(eq.to_string(), "3*f_{-1} - 3*f_{-2} + f_{-3}");
    }

    #[test]
    fn test_rejects_origin() {
        assert!(matches!(
            coefficients(&Stencil::from_ints(&[-1, 0, 1])),
            Err(Error::ContainsZero { .. })
        ));
        assert!(matches!(
            coefficients(&Stencil::from_ints(&[1, 1, 2])),
            Err(Error::DuplicatedPoint { .. })
        ));
    }

    #[test]
    fn test_min_width_below_two_still_too_narrow() {
        for min_width in [0, 1] {
            let config = Config::default().with_min_width(min_width);
            assert_eq!(
                coefficients_with(&config, &Stencil::from_ints(&[])),
                Err(Error::TooNarrow { width: 0, minimum: 2 })
            );
            assert_eq!(
                coefficients_with(&config, &Stencil::from_ints(&[1])),
                Err(Error::TooNarrow { width: 1, minimum: 2 })
            );
        }
    }
}
