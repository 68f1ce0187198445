//! Linear low-pass filters on the regular grid.
//!
//! The filter of accuracy `acc` is
//!
//! f̃ = f + (-1)^((acc - 2) / 2) (h/2)^acc ∂^acc f
//!
//! with the derivative replaced by its second-order central difference,
//! so the powers of `h` cancel and the weights are pure numbers.

use fdx_core::Expr;
use fdx_integers::{Integer, Rational};

use crate::config::{Config, EquationOptions};
use crate::coords::{unknowns, SubscriptStyle};
use crate::equation;
use crate::error::Result;
use crate::finite_difference;
use crate::generate::{check_accuracy, generate_stencil, GridType};
use crate::linalg::{add, scale, unit};
use crate::rationalize::numer_denom;
use crate::stencil::Stencil;

fn weights(acc: u32) -> Result<(Stencil, Vec<Rational>)> {
    check_accuracy(acc)?;
    let stencil = generate_stencil(acc, 2, GridType::Regular)?;
    let damping = finite_difference::coefficients(&stencil, acc)?;

    let sign = if ((acc - 2) / 2) % 2 == 0 { 1 } else { -1 };
    let factor = Rational::new(Integer::new(sign), Integer::new(2).pow(acc));
    let damping = scale(&damping, &factor);

    let identity = unit(damping.len(), damping.len() / 2);
    Ok((stencil, add(&damping, &identity)?))
}

/// Filter weights in ascending stencil order.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidAccuracyOrder`] if `acc` is odd or below 2.
pub fn coefficients(acc: u32) -> Result<Vec<Rational>> {
    let _span = tracing::debug_span!("filter", acc).entered();
    weights(acc).map(|(_, w)| w)
}

/// Integer numerators of the weights and their common denominator.
///
/// # Errors
///
/// See [`coefficients`].
pub fn coefficients_numer_denom(acc: u32) -> Result<(Vec<Integer>, Integer)> {
    let _span = tracing::debug_span!("filter", acc).entered();
    numer_denom(&weights(acc)?.1)
}

/// The filter as an equation in the samples `f_{-k} .. f_{k}`.
///
/// # Errors
///
/// See [`coefficients`].
pub fn equation(acc: u32) -> Result<Expr> {
    let _span = tracing::debug_span!("filter", acc).entered();
    let config = Config::default();
    let (stencil, w) = weights(acc)?;
    let (numerators, denominator) = numer_denom(&w)?;
    let symbols = unknowns(&stencil.sorted(), &config.function, SubscriptStyle::StencilOffset);
    equation::build(&numerators, &denominator, &symbols, 0, &config.spacing, EquationOptions::default())
}
