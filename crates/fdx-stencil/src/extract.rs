//! Per-unknown coefficients of a differentiated interpolant.
//!
//! The interpolant is `Σᵢ Nᵢ(x, h) fᵢ / D(h)` with a single-term `D`.
//! The weight of `fᵢ` in the `d`-th derivative at the origin is
//! `(∂ᵈ/∂xᵈ Nᵢ / D)(0)`, which is `cᵢ h^(-d)` for a rational `cᵢ`.
//! The spacing factor is stripped and only `cᵢ` is returned.

use fdx_integers::Rational;
use fdx_poly::Monomial;
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::lagrange::Interpolant;
use crate::rationalize::RawCoefficient;

/// One raw coefficient per unknown of `interpolant` for the `deriv`-th
/// derivative at `x = 0`. Order 0 evaluates the interpolant itself.
///
/// # Errors
///
/// - [`Error::UnexpectedDenominator`] if the denominator is not a single term
/// - [`Error::NonMonomialDivision`] if a numerator cannot be divided by it
/// - [`Error::UnexpectedSpacingPower`] if a coefficient is not a pure
///   multiple of `h^(-deriv)`
pub fn extract(interpolant: &Interpolant, deriv: u32) -> Result<Vec<RawCoefficient>> {
    let denominator = &interpolant.denominator;
    if denominator.as_term().is_none() {
        return Err(Error::UnexpectedDenominator {
            terms: denominator.len(),
        });
    }

    let expected = Monomial::spacing(-i32::try_from(deriv).unwrap_or(i32::MAX));

    interpolant
        .numerators
        .iter()
        .enumerate()
        .map(|(index, numerator)| {
            let weight = numerator
                .div_term(denominator)
                .ok_or(Error::NonMonomialDivision { index })?
                .nth_derivative(deriv)
                .at_origin();

            match weight.terms() {
                [] => Ok(RawCoefficient::Exact(Rational::zero())),
                [(m, c)] if *m == expected => Ok(RawCoefficient::Exact(c.clone())),
                terms => Err(Error::UnexpectedSpacingPower {
                    index,
                    terms: terms.len(),
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{coordinates, unknowns, SubscriptStyle};
    use crate::lagrange::lagrangian_poly;
    use fdx_poly::SparsePoly;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    fn interpolant(offsets: &[i64]) -> Interpolant {
        let offsets: Vec<Rational> = offsets.iter().map(|&a| Rational::from(a)).collect();
        let f_set = unknowns(&offsets, "f", SubscriptStyle::Positional);
        lagrangian_poly(&coordinates(&offsets), &f_set, 2).unwrap()
    }

    fn exact(values: &[Rational]) -> Vec<RawCoefficient> {
        values.iter().cloned().map(RawCoefficient::Exact).collect()
    }

    #[test]
    fn test_central_first_derivative() {
        let raw = extract(&interpolant(&[-1, 0, 1]), 1).unwrap();
        assert_eq!(raw, exact(&[q(-1, 2), q(0, 1), q(1, 2)]));
    }

    #[test]
    fn test_second_derivative() {
        let raw = extract(&interpolant(&[-1, 0, 1]), 2).unwrap();
        assert_eq!(raw, exact(&[q(1, 1), q(-2, 1), q(1, 1)]));
    }

    #[test]
    fn test_derivative_beyond_degree_vanishes() {
        let raw = extract(&interpolant(&[-1, 0, 1]), 3).unwrap();
        assert_eq!(raw, exact(&[q(0, 1), q(0, 1), q(0, 1)]));
    }

    #[test]
    fn test_value_at_origin() {
        let raw = extract(&interpolant(&[-1, 1]), 0).unwrap();
        assert_eq!(raw, exact(&[q(1, 2), q(1, 2)]));
    }

    #[test]
    fn test_rejects_multi_term_denominator() {
        let mut p = interpolant(&[-1, 1]);
        p.denominator = SparsePoly::h().add(&SparsePoly::one());
        assert_eq!(extract(&p, 1), Err(Error::UnexpectedDenominator { terms: 2 }));
    }

    #[test]
    fn test_rejects_stray_spacing_power() {
        let mut p = interpolant(&[-1, 1]);
        p.numerators[0] = p.numerators[0].add(&SparsePoly::h().pow(2));
        assert_eq!(
            extract(&p, 0),
            Err(Error::UnexpectedSpacingPower { index: 0, terms: 2 })
        );
    }
}
