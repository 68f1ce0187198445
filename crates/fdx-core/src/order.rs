//! Canonical term ordering by stencil subscript.
//!
//! Terms of a numerator are ordered by the numeric value of the subscript
//! of their sample symbol (`f_{-2}` before `f_{-1}` before `f_{0}`).
//! When every subscript is negative the order is reversed, so backward
//! formulas start from the sample nearest the origin:
//! `3*f_{-1} - 3*f_{-2} + f_{-3}`. Ties keep their incoming order.
//!
//! The rebuilt expression is structurally new; nothing is re-simplified.

use thiserror::Error;

use crate::expr::Expr;

/// Errors raised while ordering terms.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OrderError {
    /// A term carries no symbol with a numeric `_{...}` subscript.
    #[error("term `{term}` has no numeric subscript to order by")]
    MissingSubscript {
        /// The offending term, rendered as text.
        term: String,
    },
}

fn subscript_key(term: &Expr) -> Result<f64, OrderError> {
    term.first_symbol()
        .and_then(crate::symbol::Symbol::subscript_value)
        .ok_or_else(|| OrderError::MissingSubscript {
            term: term.to_string(),
        })
}

/// Orders the terms of a sum by subscript.
///
/// Nested sums are flattened first.
///
/// # Errors
///
/// Returns [`OrderError::MissingSubscript`] if some term has no numeric
/// subscript.
pub fn sort_terms(sum: &Expr) -> Result<Vec<Expr>, OrderError> {
    let mut keyed = sum
        .additive_terms()
        .into_iter()
        .map(|t| subscript_key(t).map(|k| (k, t.clone())))
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    if keyed.iter().all(|(k, _)| *k < 0.0) {
        keyed.reverse();
    }

    Ok(keyed.into_iter().map(|(_, t)| t).collect())
}

/// Reorders every numerator sum of `expr` by subscript.
///
/// A bare sum is sorted directly. For a product, each sum factor is sorted
/// and the remaining factors are kept in place. Other shapes are returned
/// unchanged.
///
/// # Errors
///
/// Returns [`OrderError::MissingSubscript`] if some term has no numeric
/// subscript.
pub fn sort_by_subscript(expr: &Expr) -> Result<Expr, OrderError> {
    match expr {
        Expr::Sum(_) => Ok(Expr::Sum(sort_terms(expr)?)),
        Expr::Product(factors) => {
            let factors = factors
                .iter()
                .map(|f| match f {
                    Expr::Sum(_) => sort_terms(f).map(Expr::Sum),
                    other => Ok(other.clone()),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Expr::Product(factors))
        }
        other => Ok(other.clone()),
    }
}
