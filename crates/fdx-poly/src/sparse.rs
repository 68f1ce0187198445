//! Sparse polynomials in `x` with Laurent coefficients in `h`.
//!
//! A [`SparsePoly`] is a finite sum `Σ c * x^i * h^k` with exact rational
//! coefficients. Terms are kept sorted by [`Monomial`] with like terms
//! combined and zero coefficients removed, so two polynomials are equal
//! exactly when their term lists are equal.

use fdx_integers::Rational;
use num_traits::{One, Zero};

use crate::monomial::Monomial;

/// A sparse polynomial over the rationals in `x` and `h^±1`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct SparsePoly {
    /// Terms in ascending monomial order.
    terms: Vec<(Monomial, Rational)>,
}

impl SparsePoly {
    /// Builds a polynomial from arbitrary terms.
    ///
    /// Terms are sorted, like terms combined and zeros dropped.
    #[must_use]
    pub fn new(terms: Vec<(Monomial, Rational)>) -> Self {
        let mut poly = Self { terms };
        poly.normalize();
        poly
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// The constant 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(Rational::one())
    }

    /// A constant polynomial.
    #[must_use]
    pub fn constant(c: Rational) -> Self {
        Self::term(Monomial::one(), c)
    }

    /// The single term `c * m`.
    #[must_use]
    pub fn term(m: Monomial, c: Rational) -> Self {
        if c.is_zero() {
            Self::zero()
        } else {
            Self { terms: vec![(m, c)] }
        }
    }

    /// The formal variable `x`.
    #[must_use]
    pub fn x() -> Self {
        Self::term(Monomial::x(), Rational::one())
    }

    /// The spacing symbol `h`.
    #[must_use]
    pub fn h() -> Self {
        Self::term(Monomial::h(), Rational::one())
    }

    /// The linear factor `x - a*h`.
    #[must_use]
    pub fn x_minus_offset(a: &Rational) -> Self {
        Self::new(vec![(Monomial::x(), Rational::one()), (Monomial::h(), -a)])
    }

    /// Returns true for the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of non-zero terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The terms in ascending monomial order.
    #[must_use]
    pub fn terms(&self) -> &[(Monomial, Rational)] {
        &self.terms
    }

    /// Coefficient of the monomial `m`.
    #[must_use]
    pub fn coeff(&self, m: &Monomial) -> Rational {
        self.terms
            .binary_search_by(|(t, _)| t.cmp(m))
            .map_or_else(|_| Rational::zero(), |i| self.terms[i].1.clone())
    }

    /// Highest power of `x`, `None` for zero.
    #[must_use]
    pub fn x_degree(&self) -> Option<u32> {
        self.terms.iter().map(|(m, _)| m.x_degree()).max()
    }

    /// Returns true when no term contains `x`.
    #[must_use]
    pub fn is_free_of_x(&self) -> bool {
        self.terms.iter().all(|(m, _)| m.is_free_of_x())
    }

    /// The single term of a one-term polynomial.
    #[must_use]
    pub fn as_term(&self) -> Option<(&Monomial, &Rational)> {
        match self.terms.as_slice() {
            [(m, c)] => Some((m, c)),
            _ => None,
        }
    }

    fn normalize(&mut self) {
        self.terms.sort_by(|a, b| a.0.cmp(&b.0));

        let mut merged: Vec<(Monomial, Rational)> = Vec::with_capacity(self.terms.len());
        for (m, c) in self.terms.drain(..) {
            match merged.last_mut() {
                Some((last, acc)) if *last == m => *acc = acc.clone() + c,
                _ => merged.push((m, c)),
            }
        }
        merged.retain(|(_, c)| !c.is_zero());

        self.terms = merged;
    }

    /// Sum of two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut terms = Vec::with_capacity(self.len() + other.len());
        terms.extend(self.terms.iter().cloned());
        terms.extend(other.terms.iter().cloned());
        Self::new(terms)
    }

    /// Additive inverse.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(m, c)| (*m, -c)).collect(),
        }
    }

    /// Difference of two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Product of two polynomials.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut terms = Vec::with_capacity(self.len() * other.len());
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                terms.push((m1.mul(m2), c1 * c2));
            }
        }
        Self::new(terms)
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &Rational) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self.terms.iter().map(|(m, x)| (*m, x * c)).collect(),
        }
    }

    /// Multiplies by the term `c * m`.
    #[must_use]
    pub fn mul_term(&self, m: &Monomial, c: &Rational) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self.terms.iter().map(|(t, x)| (t.mul(m), x * c)).collect(),
        }
    }

    /// Computes `self^n` by repeated squaring.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }
        result
    }

    /// Exact division by a single-term polynomial.
    ///
    /// Returns `None` when `divisor` is zero, has more than one term, or
    /// carries a power of `x` that does not divide every term.
    #[must_use]
    pub fn div_term(&self, divisor: &Self) -> Option<Self> {
        let (dm, dc) = divisor.as_term()?;
        let inv = dc.recip();
        let terms = self
            .terms
            .iter()
            .map(|(m, c)| m.div(dm).map(|q| (q, c * &inv)))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { terms })
    }

    /// First derivative with respect to `x`.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let terms = self
            .terms
            .iter()
            .filter_map(|(m, c)| {
                m.derivative()
                    .map(|(k, dm)| (dm, c * &Rational::from(i64::from(k))))
            })
            .collect();
        Self::new(terms)
    }

    /// `n`-th derivative with respect to `x`.
    #[must_use]
    pub fn nth_derivative(&self, n: u32) -> Self {
        (0..n).fold(self.clone(), |p, _| p.derivative())
    }

    /// Substitutes `x = 0`, leaving a Laurent polynomial in `h`.
    #[must_use]
    pub fn at_origin(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .filter(|(m, _)| m.is_free_of_x())
                .cloned()
                .collect(),
        }
    }

    /// Substitutes `x = a*h`.
    #[must_use]
    pub fn at_offset(&self, a: &Rational) -> Self {
        let terms = self
            .terms
            .iter()
            .map(|(m, c)| {
                let shift = i32::try_from(m.x_degree()).unwrap_or(i32::MAX);
                let value = c * &a.pow(m.x_degree());
                (Monomial::spacing(m.h_degree().saturating_add(shift)), value)
            })
            .collect();
        Self::new(terms)
    }
}

impl std::fmt::Display for SparsePoly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (i, (m, c)) in self.terms.iter().enumerate() {
            let magnitude = c.abs();
            if i == 0 {
                if c.is_negative() {
                    write!(f, "-")?;
                }
            } else if c.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }

            if m.is_one() {
                write!(f, "{magnitude}")?;
            } else if magnitude.is_one() {
                write!(f, "{m}")?;
            } else {
                write!(f, "{magnitude}*{m}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    #[test]
    fn test_normalize_combines() {
        let p = SparsePoly::new(vec![
            (Monomial::x(), q(1, 2)),
            (Monomial::h(), q(3, 1)),
            (Monomial::x(), q(1, 2)),
            (Monomial::h(), q(-3, 1)),
        ]);
        assert_eq!(p, SparsePoly::x());
    }

    #[test]
    fn test_linear_factors() {
        // (x + h)(x - h) = x^2 - h^2
        let p = SparsePoly::x_minus_offset(&q(-1, 1)).mul(&SparsePoly::x_minus_offset(&q(1, 1)));
        assert_eq!(p.len(), 2);
        assert_eq!(p.coeff(&Monomial::new(2, 0)), q(1, 1));
        assert_eq!(p.coeff(&Monomial::spacing(2)), q(-1, 1));
        assert_eq!(p.coeff(&Monomial::new(1, 1)), Rational::zero());
    }

    #[test]
    fn test_derivative_and_origin() {
        // d/dx (x^2 - 3xh + 2h^2) = 2x - 3h
        let p = SparsePoly::x_minus_offset(&q(1, 1)).mul(&SparsePoly::x_minus_offset(&q(2, 1)));
        let dp = p.derivative();
        assert_eq!(dp.at_origin(), SparsePoly::term(Monomial::h(), q(-3, 1)));
        assert_eq!(p.nth_derivative(2), SparsePoly::constant(q(2, 1)));
        assert!(p.nth_derivative(3).is_zero());
    }

    #[test]
    fn test_div_term() {
        let p = SparsePoly::new(vec![(Monomial::new(1, 1), q(4, 1)), (Monomial::spacing(2), q(2, 1))]);
        let d = SparsePoly::term(Monomial::spacing(2), q(2, 1));
        let quotient = p.div_term(&d).unwrap();
        assert_eq!(quotient.coeff(&Monomial::new(1, -1)), q(2, 1));
        assert_eq!(quotient.coeff(&Monomial::one()), q(1, 1));

        // x does not divide h^2
        assert!(p.div_term(&SparsePoly::x()).is_none());
        // not a single term
        assert!(p.div_term(&p).is_none());
    }

    #[test]
    fn test_at_offset() {
        // (x - h)(x + 2h) at x = h vanishes; at x = 2h gives 4h^2
        let p = SparsePoly::x_minus_offset(&q(1, 1)).mul(&SparsePoly::x_minus_offset(&q(-2, 1)));
        assert!(p.at_offset(&q(1, 1)).is_zero());
        assert_eq!(p.at_offset(&q(2, 1)), SparsePoly::term(Monomial::spacing(2), q(4, 1)));
    }

    #[test]
    fn test_pow() {
        // (x - h)^3 has four terms
        let cube = SparsePoly::x_minus_offset(&q(1, 1)).pow(3);
        assert_eq!(cube.len(), 4);
        assert_eq!(cube.coeff(&Monomial::new(1, 2)), q(3, 1));
        assert_eq!(SparsePoly::h().pow(0), SparsePoly::one());
    }

    #[test]
    fn test_display() {
        let p = SparsePoly::x_minus_offset(&q(3, 2));
        assert_eq!(p.to_string(), "-3/2*h + x");
        assert_eq!(SparsePoly::zero().to_string(), "0");
    }
}
