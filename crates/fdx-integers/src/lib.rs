//! # fdx-integers
//!
//! Exact arithmetic used by every other layer of fdx.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//! - Exact conversion of `f64` values and best rational approximation
//!   with a bounded denominator (see [`approx`])
//!
//! Stencil offsets, Lagrangian weights and finite difference coefficients
//! are all carried as [`Rational`], so no derivation ever rounds.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod macros;

pub mod approx;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
