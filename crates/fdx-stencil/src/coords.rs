//! Coordinates and unknown sample symbols for a validated stencil.

use fdx_core::symbol::offset_subscript;
use fdx_core::Symbol;
use fdx_integers::Rational;
use fdx_poly::{Monomial, SparsePoly};

/// How the subscript of each unknown is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubscriptStyle {
    /// `f_{0}`, `f_{1}`, ... in sorted stencil order.
    #[default]
    Positional,
    /// The stencil offset itself: `f_{-1.5}`, `f_{2}`.
    StencilOffset,
}

/// The coordinates `a_i * h` of sorted offsets.
#[must_use]
pub fn coordinates(sorted: &[Rational]) -> Vec<SparsePoly> {
    sorted
        .iter()
        .map(|a| SparsePoly::term(Monomial::h(), a.clone()))
        .collect()
}

/// One unknown sample symbol per sorted offset.
#[must_use]
pub fn unknowns(sorted: &[Rational], function: &str, style: SubscriptStyle) -> Vec<Symbol> {
    sorted
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let subscript = match style {
                SubscriptStyle::Positional => i.to_string(),
                SubscriptStyle::StencilOffset => offset_subscript(a),
            };
            Symbol::subscripted(function, &subscript)
        })
        .collect()
}
