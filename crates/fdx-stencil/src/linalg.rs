//! Vector helpers over coefficient lists and unknowns.

use fdx_core::{Expr, Symbol};
use fdx_integers::Rational;
use num_traits::One;

use crate::error::{Error, Result};

/// The unevaluated sum `Σ cᵢ sᵢ` of `coefficient * symbol` products.
///
/// # Errors
///
/// Returns [`Error::InconsistentDataSet`] if the lengths differ.
pub fn dot(coefficients: &[Rational], symbols: &[Symbol]) -> Result<Expr> {
    if coefficients.len() != symbols.len() {
        return Err(Error::InconsistentDataSet {
            left: coefficients.len(),
            right: symbols.len(),
        });
    }
    let terms = coefficients
        .iter()
        .zip(symbols)
        .map(|(c, s)| Expr::scaled(c.clone(), Expr::Symbol(s.clone())))
        .collect();
    Ok(Expr::sum(terms))
}

/// Element-wise sum.
///
/// # Errors
///
/// Returns [`Error::InconsistentDataSet`] if the lengths differ.
pub fn add(a: &[Rational], b: &[Rational]) -> Result<Vec<Rational>> {
    if a.len() != b.len() {
        return Err(Error::InconsistentDataSet {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// Multiplies every element by `c`.
#[must_use]
pub fn scale(values: &[Rational], c: &Rational) -> Vec<Rational> {
    values.iter().map(|v| v * c).collect()
}

/// Removes explicit unit coefficients: `1*f` becomes `f`.
#[must_use]
pub fn drop_coefficient_of_1(expr: &Expr) -> Expr {
    match expr {
        Expr::Product(factors) => {
            let kept: Vec<Expr> = factors
                .iter()
                .filter(|f| !f.is_one())
                .map(drop_coefficient_of_1)
                .collect();
            Expr::product(kept)
        }
        Expr::Sum(terms) => Expr::Sum(terms.iter().map(drop_coefficient_of_1).collect()),
        Expr::Pow(base, e) => Expr::pow(drop_coefficient_of_1(base), *e),
        atom => atom.clone(),
    }
}

/// The unit vector of length `len` with a 1 at `at`.
#[must_use]
pub fn unit(len: usize, at: usize) -> Vec<Rational> {
    (0..len)
        .map(|i| if i == at { Rational::one() } else { Rational::default() })
        .collect()
}
