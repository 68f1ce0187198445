//! # fdx-poly
//!
//! The algebra substrate for stencil derivations.
//!
//! Lagrangian interpolants over a stencil `x_j = a_j * h` are polynomials
//! in the formal variable `x` whose coefficients are Laurent monomials in
//! the spacing `h`. This crate provides exactly that shape:
//! - [`Monomial`]: `x^i * h^k` with `i >= 0` and any integer `k`
//! - [`SparsePoly`]: a sparse sum of such monomials over exact rationals,
//!   with differentiation in `x`, evaluation at `x = 0` and exact
//!   division by a single-term divisor

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod monomial;
pub mod sparse;

#[cfg(test)]
mod proptests;

pub use monomial::Monomial;
pub use sparse::SparsePoly;
