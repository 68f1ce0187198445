//! Series expansions in the grid spacing.
//!
//! This crate provides:
//! - [`TaylorSeries`]: `f(a*h) = Σ f^(k) (a*h)^k / k!` truncated at a
//!   requested order
//! - [`DerivativeForm`]: a linear combination of derivative symbols
//! - [`LaurentSeries`]: a finite Laurent series in `h` with
//!   [`DerivativeForm`] coefficients, used to collect the residual of a
//!   discrete formula and read off its leading term

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod laurent;
pub mod taylor;

#[cfg(test)]
mod proptests;

pub use error::SeriesError;
pub use laurent::{DerivativeForm, LaurentSeries};
pub use taylor::{derivative_symbol, TaylorSeries};
