//! Lagrangian interpolation through stencil coordinates.
//!
//! For coordinates `x_0, ..., x_{n-1}` the basis polynomials are
//!
//! lᵢ(x) = Πⱼ≠ᵢ (x - xⱼ) / (xᵢ - xⱼ)
//!
//! and the interpolant is `p(x) = Σᵢ lᵢ(x) fᵢ`. Every basis is kept as a
//! numerator/denominator pair; the interpolant brings all of them over a
//! single shared denominator so that it is linear in the unknowns with
//! polynomial coefficients.

use fdx_core::Symbol;
use fdx_integers::Rational;
use fdx_poly::SparsePoly;
use num_traits::One;

use crate::config::MIN_WIDTH;
use crate::error::{Error, Result};

/// A quotient of two polynomials in `x` and `h`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RationalPoly {
    /// Numerator.
    pub numerator: SparsePoly,
    /// Denominator.
    pub denominator: SparsePoly,
}

/// The interpolant `Σ numeratorᵢ fᵢ / denominator`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interpolant {
    /// One numerator per unknown, in unknown order.
    pub numerators: Vec<SparsePoly>,
    /// The shared denominator.
    pub denominator: SparsePoly,
    /// The unknowns the numerators multiply.
    pub unknowns: Vec<Symbol>,
}

fn first_duplicate(x_set: &[SparsePoly]) -> Option<usize> {
    (1..x_set.len()).find(|&i| x_set[..i].contains(&x_set[i]))
}

/// The Lagrangian basis polynomial of `degree` that is 1 at `x_set[point_at]`.
///
/// # Errors
///
/// - [`Error::DegreeNotNatural`] if `degree` is 0
/// - [`Error::DuplicatedPoint`] if two coordinates coincide
/// - [`Error::InconsistentDataSet`] if `x_set` does not have `degree + 1` entries
/// - [`Error::PointOutOfRange`] if `point_at > degree`
pub fn lagrangian_basis(x_set: &[SparsePoly], degree: usize, point_at: usize) -> Result<RationalPoly> {
    if degree < 1 {
        return Err(Error::DegreeNotNatural { degree });
    }
    if first_duplicate(x_set).is_some() {
        let duplicates = duplicated_offsets(x_set);
        return Err(Error::DuplicatedPoint { duplicates });
    }
    let num_points = degree + 1;
    if x_set.len() != num_points {
        return Err(Error::InconsistentDataSet {
            left: x_set.len(),
            right: num_points,
        });
    }
    if point_at >= num_points {
        return Err(Error::PointOutOfRange {
            point: point_at,
            len: num_points,
        });
    }

    let x = SparsePoly::x();
    let at = &x_set[point_at];
    let mut numerator = SparsePoly::one();
    let mut denominator = SparsePoly::one();
    for (j, xj) in x_set.iter().enumerate() {
        if j == point_at {
            continue;
        }
        numerator = numerator.mul(&x.sub(xj));
        denominator = denominator.mul(&at.sub(xj));
    }

    Ok(RationalPoly {
        numerator,
        denominator,
    })
}

/// Offsets of coordinates of the form `a*h` that occur more than once.
fn duplicated_offsets(x_set: &[SparsePoly]) -> Vec<Rational> {
    let mut dups: Vec<Rational> = (1..x_set.len())
        .filter(|&i| x_set[..i].contains(&x_set[i]))
        .map(|i| {
            x_set[i]
                .terms()
                .first()
                .map_or_else(Rational::default, |(_, c)| c.clone())
        })
        .collect();
    dups.sort();
    dups.dedup();
    dups
}

/// The interpolant through `(x_set[i], f_set[i])`.
///
/// # Errors
///
/// - [`Error::InconsistentDataSet`] if the lists differ in length
/// - [`Error::TooNarrow`] for fewer than `min_width` points, and never
///   fewer than [`MIN_WIDTH`]
/// - any error of [`lagrangian_basis`]
/// - [`Error::UnexpectedDenominator`] if a basis denominator is not a
///   single term, which cannot be brought over a common denominator
pub fn lagrangian_poly(x_set: &[SparsePoly], f_set: &[Symbol], min_width: usize) -> Result<Interpolant> {
    if x_set.len() != f_set.len() {
        return Err(Error::InconsistentDataSet {
            left: x_set.len(),
            right: f_set.len(),
        });
    }
    let minimum = min_width.max(MIN_WIDTH);
    let too_narrow = Error::TooNarrow {
        width: x_set.len(),
        minimum,
    };
    if x_set.len() < minimum {
        return Err(too_narrow);
    }

    let degree = x_set.len().checked_sub(1).ok_or(too_narrow)?;
    let bases = (0..x_set.len())
        .map(|i| lagrangian_basis(x_set, degree, i))
        .collect::<Result<Vec<_>>>()?;

    // Common denominator: the highest power of h among the basis
    // denominators, with unit coefficient.
    let mut common = None;
    for basis in &bases {
        let (m, _) = basis.denominator.as_term().ok_or(Error::UnexpectedDenominator {
            terms: basis.denominator.len(),
        })?;
        common = Some(match common {
            Some(c) if c >= *m => c,
            _ => *m,
        });
    }
    let common = common.unwrap_or_default();
    let denominator = SparsePoly::term(common, Rational::one());

    let numerators = bases
        .iter()
        .map(|basis| {
            let factor = denominator
                .div_term(&basis.denominator)
                .ok_or(Error::UnexpectedDenominator {
                    terms: basis.denominator.len(),
                })?;
            Ok(basis.numerator.mul(&factor))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Interpolant {
        numerators,
        denominator,
        unknowns: f_set.to_vec(),
    })
}
