//! Finite difference formulas for arbitrary stencils.
//!
//! The `d`-th derivative at the origin is approximated by differentiating
//! the interpolant through the stencil samples:
//!
//! f⁽ᵈ⁾(0) ≈ Σᵢ cᵢ f(aᵢ h) / hᵈ
//!
//! Coefficients are returned in ascending stencil order regardless of the
//! order the stencil was given in.
//!
//! # Example
//!
//! ```
//! use fdx_stencil::{finite_difference, Stencil};
//!
//! let stencil = Stencil::from_ints(&[-2, -1, 0, 1, 2]);
//! let eq = finite_difference::equation(&stencil, 1).unwrap();
//! assert_eq!(eq.to_string(), "(f_{-2} - 8*f_{-1} + 8*f_{1} - f_{2})/(12*h)");
//! ```

use fdx_core::Expr;
use fdx_integers::{Integer, Rational};

use crate::config::{Config, EquationOptions};
use crate::coords::{coordinates, unknowns, SubscriptStyle};
use crate::equation;
use crate::error::{Error, Result};
use crate::extract::extract;
use crate::lagrange::lagrangian_poly;
use crate::rationalize::{rationalize, rationalize_numer_denom, RawCoefficient};
use crate::stencil::Stencil;
use crate::truncation::{leading_error, LeadingErrorTerm};

/// Raw weights of the `deriv`-th derivative at the origin for sorted offsets.
pub(crate) fn raw_weights(sorted: &[Rational], deriv: u32, config: &Config) -> Result<Vec<RawCoefficient>> {
    let x_set = coordinates(sorted);
    let f_set = unknowns(sorted, &config.function, SubscriptStyle::Positional);
    let interpolant = lagrangian_poly(&x_set, &f_set, config.min_width)?;
    extract(&interpolant, deriv)
}

fn validated(stencil: &Stencil, deriv: u32, config: &Config) -> Result<Vec<Rational>> {
    if deriv < 1 {
        return Err(Error::UnsupportedOrderOfDerivative { order: deriv });
    }
    stencil.validate(config)
}

/// Coefficients of the `deriv`-th derivative.
///
/// # Errors
///
/// Returns a validation error for a bad stencil or `deriv == 0`.
pub fn coefficients(stencil: &Stencil, deriv: u32) -> Result<Vec<Rational>> {
    coefficients_with(&Config::default(), stencil, deriv)
}

/// [`coefficients`] with an explicit configuration.
///
/// # Errors
///
/// See [`coefficients`].
pub fn coefficients_with(config: &Config, stencil: &Stencil, deriv: u32) -> Result<Vec<Rational>> {
    let _span = tracing::debug_span!("finite_difference", width = stencil.len(), deriv).entered();
    let sorted = validated(stencil, deriv, config)?;
    rationalize(&raw_weights(&sorted, deriv, config)?)
}

/// Integer numerators of the coefficients and their common denominator.
///
/// # Errors
///
/// See [`coefficients`].
pub fn coefficients_numer_denom(stencil: &Stencil, deriv: u32) -> Result<(Vec<Integer>, Integer)> {
    coefficients_numer_denom_with(&Config::default(), stencil, deriv)
}

/// [`coefficients_numer_denom`] with an explicit configuration.
///
/// # Errors
///
/// See [`coefficients`].
pub fn coefficients_numer_denom_with(
    config: &Config,
    stencil: &Stencil,
    deriv: u32,
) -> Result<(Vec<Integer>, Integer)> {
    let _span = tracing::debug_span!("finite_difference", width = stencil.len(), deriv).entered();
    let sorted = validated(stencil, deriv, config)?;
    rationalize_numer_denom(&raw_weights(&sorted, deriv, config)?)
}

/// The formula as an equation with terms ordered by stencil offset.
///
/// # Errors
///
/// See [`coefficients`].
pub fn equation(stencil: &Stencil, deriv: u32) -> Result<Expr> {
    equation_with(&Config::default(), stencil, deriv, EquationOptions::default())
}

/// [`equation`] with explicit assembly options.
///
/// # Errors
///
/// See [`coefficients`].
pub fn equation_with_options(stencil: &Stencil, deriv: u32, options: EquationOptions) -> Result<Expr> {
    equation_with(&Config::default(), stencil, deriv, options)
}

/// [`equation`] with an explicit configuration and options.
///
/// # Errors
///
/// See [`coefficients`].
pub fn equation_with(config: &Config, stencil: &Stencil, deriv: u32, options: EquationOptions) -> Result<Expr> {
    let _span = tracing::debug_span!("finite_difference", width = stencil.len(), deriv).entered();
    let sorted = validated(stencil, deriv, config)?;
    let (numerators, denominator) = rationalize_numer_denom(&raw_weights(&sorted, deriv, config)?)?;
    let symbols = unknowns(&sorted, &config.function, SubscriptStyle::StencilOffset);
    equation::build(&numerators, &denominator, &symbols, deriv, &config.spacing, options)
}

/// Leading truncation error of the formula.
///
/// # Errors
///
/// See [`coefficients`]; additionally propagates internal errors from
/// [`leading_error`].
pub fn truncation_error(stencil: &Stencil, deriv: u32) -> Result<LeadingErrorTerm> {
    truncation_error_with(&Config::default(), stencil, deriv)
}

/// [`truncation_error`] with an explicit configuration.
///
/// # Errors
///
/// See [`truncation_error`].
pub fn truncation_error_with(config: &Config, stencil: &Stencil, deriv: u32) -> Result<LeadingErrorTerm> {
    let _span = tracing::debug_span!("finite_difference", width = stencil.len(), deriv).entered();
    let sorted = validated(stencil, deriv, config)?;
    let coefficients = rationalize(&raw_weights(&sorted, deriv, config)?)?;
    leading_error(&coefficients, &sorted, deriv, config)
}
