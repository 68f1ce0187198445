//! Assembly of finished equations.
//!
//! An equation is `(Σ nᵢ fᵢ) / (L h^d)`: the integer numerators dotted with
//! the unknowns, over the common denominator and the spacing power.

use fdx_core::{sort_by_subscript, Expr, Symbol};
use fdx_integers::{Integer, Rational};
use num_traits::{One, Zero};

use crate::config::EquationOptions;
use crate::error::{Error, Result};
use crate::linalg::{dot, drop_coefficient_of_1};

/// Builds `(Σ nᵢ fᵢ) / (denominator * spacing^deriv)`.
///
/// Zero numerators are left out unless `options.keep_zero` is set, and an
/// equation with no terms left is the number `0`. With `options.sort` the
/// terms are ordered by subscript.
///
/// # Errors
///
/// - [`Error::InconsistentDataSet`] if the lengths differ
/// - [`Error::Order`] if sorting meets a term without a numeric subscript
pub fn build(
    numerators: &[Integer],
    denominator: &Integer,
    unknowns: &[Symbol],
    deriv: u32,
    spacing: &str,
    options: EquationOptions,
) -> Result<Expr> {
    if numerators.len() != unknowns.len() {
        return Err(Error::InconsistentDataSet {
            left: numerators.len(),
            right: unknowns.len(),
        });
    }

    let (coefficients, symbols): (Vec<Rational>, Vec<Symbol>) = numerators
        .iter()
        .zip(unknowns)
        .filter(|(n, _)| options.keep_zero || !n.is_zero())
        .map(|(n, s)| (Rational::from(n.clone()), s.clone()))
        .unzip();
    if coefficients.is_empty() {
        return Ok(Expr::Number(Rational::zero()));
    }
    let numer = drop_coefficient_of_1(&dot(&coefficients, &symbols)?);

    let mut factors = vec![numer];
    if !denominator.is_one() {
        factors.push(Expr::Number(Rational::new(Integer::one(), denominator.clone())));
    }
    if deriv > 0 {
        let power = i32::try_from(deriv).unwrap_or(i32::MAX);
        factors.push(Expr::pow(Expr::symbol(spacing), -power));
    }
    let equation = Expr::product(factors);

    if options.sort {
        Ok(sort_by_subscript(&equation)?)
    } else {
        Ok(equation)
    }
}
