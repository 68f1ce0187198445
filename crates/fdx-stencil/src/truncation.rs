//! Leading truncation error of a derived formula.
//!
//! Substituting the Taylor expansion of every sample into the formula
//! gives a Laurent series in `h`. Subtracting it from the exact
//! derivative leaves the residual
//!
//! r(h) = f⁽ᵈ⁾ - h⁻ᵈ Σᵢ cᵢ f(aᵢ h)
//!
//! whose lowest surviving term is the truncation error. Every term of
//! order `h⁰` or below must cancel exactly.

use fdx_core::{Expr, Symbol};
use fdx_integers::Rational;
use fdx_series::{derivative_symbol, DerivativeForm, LaurentSeries, TaylorSeries};
use std::fmt;

use crate::config::Config;
use crate::error::{Error, Result};

/// The lowest-order term of a truncation error, `c f⁽ᵏ⁾ hᵖ`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadingErrorTerm {
    /// The power of the spacing, which is the order of accuracy.
    pub spacing_power: i32,
    /// The derivative combination multiplying `h^spacing_power`.
    pub form: DerivativeForm,
    /// Name of the sampled function.
    pub function: String,
    /// Name of the spacing symbol.
    pub spacing: String,
}

impl LeadingErrorTerm {
    /// Order of accuracy of the formula.
    #[must_use]
    pub fn accuracy(&self) -> i32 {
        self.spacing_power
    }

    /// Derivative order of a single-term error.
    #[must_use]
    pub fn derivative_order(&self) -> Option<u32> {
        self.form.as_single().map(|(k, _)| k)
    }

    /// Rational factor of a single-term error.
    #[must_use]
    pub fn coefficient(&self) -> Option<&Rational> {
        self.form.as_single().map(|(_, c)| c)
    }

    /// The derivative symbol of a single-term error.
    #[must_use]
    pub fn derivative_symbol(&self) -> Option<Symbol> {
        let order = self.derivative_order()?;
        derivative_symbol(&self.function, i64::from(order)).ok()
    }

    /// The error term as an expression.
    #[must_use]
    pub fn to_expr(&self) -> Expr {
        LaurentSeries::term(self.spacing_power, self.form.clone()).to_expr(&self.function, &self.spacing)
    }
}

impl fmt::Display for LeadingErrorTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_expr())
    }
}

/// Leading truncation error of `Σ cᵢ f(aᵢ h) / h^deriv` against `f^(deriv)`.
///
/// Each sample is expanded through `h^(len + deriv)`, which is enough to
/// reach the first term that does not cancel.
///
/// # Errors
///
/// - [`Error::InconsistentDataSet`] if the lists differ in length
/// - [`Error::UncancelledLowerOrder`] if a term of order `h⁰` or below
///   survives
/// - [`Error::TruncationTermsExhausted`] if every computed term cancels
pub fn leading_error(
    coefficients: &[Rational],
    offsets: &[Rational],
    deriv: u32,
    config: &Config,
) -> Result<LeadingErrorTerm> {
    if coefficients.len() != offsets.len() {
        return Err(Error::InconsistentDataSet {
            left: coefficients.len(),
            right: offsets.len(),
        });
    }

    let width = u32::try_from(offsets.len()).unwrap_or(u32::MAX);
    let up_to = width.saturating_add(deriv);
    let shift = i32::try_from(deriv).unwrap_or(i32::MAX);

    let mut approximation = LaurentSeries::zero();
    for (c, a) in coefficients.iter().zip(offsets) {
        let taylor = TaylorSeries::expand(a.clone(), i64::from(up_to))?;
        approximation = approximation.add(&taylor.to_laurent().scale(c));
    }
    let approximation = approximation.shift(-shift);

    let residual = LaurentSeries::derivative(deriv).sub(&approximation);

    match residual.leading_term() {
        None => Err(Error::TruncationTermsExhausted { terms: up_to }),
        Some((power, _)) if power <= 0 => Err(Error::UncancelledLowerOrder { power }),
        Some((power, form)) => {
            tracing::debug!(power, terms = up_to, "leading truncation error");
            Ok(LeadingErrorTerm {
                spacing_power: power,
                form: form.clone(),
                function: config.function.clone(),
                spacing: config.spacing.clone(),
            })
        }
    }
}
