//! Taylor expansion of an unknown function about a stencil offset.
//!
//! For a sample located at `a*h` from the expansion point,
//!
//! f(a*h) = Σₖ₌₀ⁿ f⁽ᵏ⁾ (a*h)ᵏ / k!
//!
//! where `f⁽ᵏ⁾` are opaque derivative symbols evaluated at the origin.
//! Only the rational factors `aᵏ / k!` are stored; the symbol and the
//! power of `h` are implied by the index.

use fdx_core::{Expr, Symbol};
use fdx_integers::{Integer, Rational};
use num_traits::{One, Zero};

use crate::error::SeriesError;
use crate::laurent::{DerivativeForm, LaurentSeries};

/// A Taylor expansion truncated after the `hⁿ` term.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TaylorSeries {
    offset: Rational,
    /// `coeffs[k] = offsetᵏ / k!`.
    coeffs: Vec<Rational>,
}

/// Computes `n!`.
fn factorial(n: u32) -> Integer {
    (1..=i64::from(n)).fold(Integer::one(), |acc, k| acc * Integer::new(k))
}

impl TaylorSeries {
    /// Expands about `offset * h` through the `h^up_to` term.
    #[must_use]
    pub fn new(offset: Rational, up_to: u32) -> Self {
        let mut coeffs = Vec::with_capacity(up_to as usize + 1);
        let mut power = Rational::one();
        for k in 0..=up_to {
            if k > 0 {
                power = &power * &offset;
            }
            coeffs.push(&power / &Rational::from_integer(factorial(k)));
        }
        Self { offset, coeffs }
    }

    /// Checked form of [`TaylorSeries::new`] for a signed term count.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::TermsNotNatural`] when `up_to` is negative.
    pub fn expand(offset: Rational, up_to: i64) -> Result<Self, SeriesError> {
        let up_to = u32::try_from(up_to).map_err(|_| SeriesError::TermsNotNatural { terms: up_to })?;
        Ok(Self::new(offset, up_to))
    }

    /// The expansion offset in units of `h`.
    #[must_use]
    pub fn offset(&self) -> &Rational {
        &self.offset
    }

    /// Highest power of `h` kept.
    #[must_use]
    pub fn order(&self) -> u32 {
        u32::try_from(self.coeffs.len() - 1).unwrap_or(u32::MAX)
    }

    /// Factor multiplying `f^(k) h^k`; zero past the truncation order.
    #[must_use]
    pub fn coeff(&self, k: u32) -> Rational {
        self.coeffs.get(k as usize).cloned().unwrap_or_else(Rational::zero)
    }

    /// The non-zero `(k, offsetᵏ / k!)` pairs.
    pub fn terms(&self) -> impl Iterator<Item = (u32, &Rational)> {
        (0u32..).zip(self.coeffs.iter()).filter(|(_, c)| !c.is_zero())
    }

    /// The expansion as a Laurent series in `h`.
    #[must_use]
    pub fn to_laurent(&self) -> LaurentSeries {
        let mut series = LaurentSeries::zero();
        for (k, c) in self.terms() {
            let power = i32::try_from(k).unwrap_or(i32::MAX);
            series = series.add(&LaurentSeries::term(power, DerivativeForm::single(k, c.clone())));
        }
        series
    }

    /// The expansion as an expression, lowest power first.
    #[must_use]
    pub fn to_expr(&self, function: &str, spacing: &str) -> Expr {
        let terms = self
            .terms()
            .map(|(k, c)| {
                let mut factors = Vec::with_capacity(3);
                if !c.is_one() {
                    factors.push(Expr::Number(c.clone()));
                }
                factors.push(Expr::Symbol(Symbol::derivative(function, k)));
                if k > 0 {
                    let k = i32::try_from(k).unwrap_or(i32::MAX);
                    factors.push(Expr::pow(Expr::symbol(spacing), k));
                }
                Expr::product(factors)
            })
            .collect();
        Expr::sum(terms)
    }
}

/// The derivative symbol `f^(order)`, or `f` for order 0.
///
/// # Errors
///
/// Returns [`SeriesError::NegativeDerivativeOrder`] for a negative order.
pub fn derivative_symbol(function: &str, order: i64) -> Result<Symbol, SeriesError> {
    let order = u32::try_from(order).map_err(|_| SeriesError::NegativeDerivativeOrder { order })?;
    Ok(Symbol::derivative(function, order))
}
