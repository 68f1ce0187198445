//! Laurent series in the spacing with derivative-valued coefficients.
//!
//! Dividing a combination of Taylor expansions by `h^d` produces
//!
//! r(h) = Σᵢ₌ₘⁿ Dᵢ hⁱ
//!
//! where each `Dᵢ` is a finite linear combination `Σ cₖ f⁽ᵏ⁾` of
//! derivative symbols. Both ends are finite, so the series is stored as
//! a sparse map from exponent to coefficient.

use fdx_core::{Expr, Symbol};
use fdx_integers::Rational;
use num_traits::{One, Zero};
use std::collections::BTreeMap;

/// A linear combination `Σ cₖ f⁽ᵏ⁾` of derivative symbols.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct DerivativeForm {
    coeffs: BTreeMap<u32, Rational>,
}

impl DerivativeForm {
    /// The empty combination.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// The single term `c * f^(order)`.
    #[must_use]
    pub fn single(order: u32, c: Rational) -> Self {
        let mut coeffs = BTreeMap::new();
        if !c.is_zero() {
            coeffs.insert(order, c);
        }
        Self { coeffs }
    }

    /// Returns true when every coefficient vanishes.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Coefficient of `f^(order)`.
    #[must_use]
    pub fn coeff(&self, order: u32) -> Rational {
        self.coeffs.get(&order).cloned().unwrap_or_else(Rational::zero)
    }

    /// The non-zero `(order, coefficient)` pairs, lowest order first.
    pub fn terms(&self) -> impl Iterator<Item = (u32, &Rational)> {
        self.coeffs.iter().map(|(&k, c)| (k, c))
    }

    /// The single term of a one-term combination.
    #[must_use]
    pub fn as_single(&self) -> Option<(u32, &Rational)> {
        let mut it = self.terms();
        match (it.next(), it.next()) {
            (Some(t), None) => Some(t),
            _ => None,
        }
    }

    /// Sum of two combinations.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut coeffs = self.coeffs.clone();
        for (k, c) in &other.coeffs {
            let sum = coeffs.get(k).map_or_else(|| c.clone(), |a| a + c);
            if sum.is_zero() {
                coeffs.remove(k);
            } else {
                coeffs.insert(*k, sum);
            }
        }
        Self { coeffs }
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &Rational) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self {
            coeffs: self.coeffs.iter().map(|(&k, x)| (k, x * c)).collect(),
        }
    }

    /// The combination as `(coefficient, symbol)` products.
    fn to_terms(&self, function: &str) -> Vec<(Rational, Expr)> {
        self.terms()
            .map(|(k, c)| (c.clone(), Expr::Symbol(Symbol::derivative(function, k))))
            .collect()
    }
}

/// A finite Laurent series `Σ Dᵢ hⁱ` with [`DerivativeForm`] coefficients.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct LaurentSeries {
    /// Non-zero coefficients indexed by exponent of `h`.
    coeffs: BTreeMap<i32, DerivativeForm>,
}

impl LaurentSeries {
    /// The zero series.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// The single term `form * h^power`.
    #[must_use]
    pub fn term(power: i32, form: DerivativeForm) -> Self {
        let mut coeffs = BTreeMap::new();
        if !form.is_zero() {
            coeffs.insert(power, form);
        }
        Self { coeffs }
    }

    /// The plain derivative `f^(order)` as a series.
    #[must_use]
    pub fn derivative(order: u32) -> Self {
        Self::term(0, DerivativeForm::single(order, Rational::one()))
    }

    /// Returns true if the series is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Coefficient of `h^power`.
    #[must_use]
    pub fn coeff(&self, power: i32) -> DerivativeForm {
        self.coeffs.get(&power).cloned().unwrap_or_default()
    }

    /// Lowest exponent with a non-zero coefficient.
    #[must_use]
    pub fn order(&self) -> Option<i32> {
        self.coeffs.keys().next().copied()
    }

    /// Highest exponent with a non-zero coefficient.
    #[must_use]
    pub fn max_exponent(&self) -> Option<i32> {
        self.coeffs.keys().next_back().copied()
    }

    /// The lowest-order term.
    #[must_use]
    pub fn leading_term(&self) -> Option<(i32, &DerivativeForm)> {
        self.coeffs.iter().next().map(|(&p, d)| (p, d))
    }

    /// All non-zero terms, lowest power first.
    pub fn terms(&self) -> impl Iterator<Item = (i32, &DerivativeForm)> {
        self.coeffs.iter().map(|(&p, d)| (p, d))
    }

    /// Sum of two series.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut coeffs = self.coeffs.clone();
        for (p, d) in &other.coeffs {
            let sum = coeffs.get(p).map_or_else(|| d.clone(), |a| a.add(d));
            if sum.is_zero() {
                coeffs.remove(p);
            } else {
                coeffs.insert(*p, sum);
            }
        }
        Self { coeffs }
    }

    /// Difference of two series.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.scale(&-Rational::one()))
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &Rational) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self {
            coeffs: self.coeffs.iter().map(|(&p, d)| (p, d.scale(c))).collect(),
        }
    }

    /// Multiplies by `h^k`.
    #[must_use]
    pub fn shift(&self, k: i32) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|(&p, d)| (p + k, d.clone())).collect(),
        }
    }

    /// Drops every term of exponent `>= power`.
    #[must_use]
    pub fn truncate(&self, power: i32) -> Self {
        Self {
            coeffs: self.coeffs.range(..power).map(|(&p, d)| (p, d.clone())).collect(),
        }
    }

    /// The series as an expression, lowest power first.
    #[must_use]
    pub fn to_expr(&self, function: &str, spacing: &str) -> Expr {
        let mut terms = Vec::new();
        for (p, form) in self.terms() {
            for (c, sym) in form.to_terms(function) {
                let mut factors = vec![Expr::Number(c), sym];
                if p != 0 {
                    factors.push(Expr::pow(Expr::symbol(spacing), p));
                }
                terms.push(Expr::product(factors));
            }
        }
        Expr::sum(terms)
    }
}
