//! # fdx-stencil
//!
//! Exact finite difference and interpolation formulas for arbitrary
//! one-dimensional stencils.
//!
//! This crate provides:
//! - Stencil validation and symbolic coordinates ([`Stencil`], [`coords`])
//! - Lagrangian interpolation through the stencil points ([`lagrange`])
//! - Coefficient extraction and exact rationalization ([`extract`],
//!   [`rationalize`])
//! - Finite difference and interpolation formulas with their leading
//!   truncation error ([`finite_difference`], [`interpolation`],
//!   [`truncation`])
//! - Central formulas of a requested accuracy on regular, cell-centered and
//!   staggered grids ([`generate`]) and linear filters ([`filter`])
//! - Parallel tables of independent derivations (`parallel`, behind the
//!   `parallel` feature)
//!
//! ## Example
//!
//! ```
//! use fdx_stencil::{finite_difference, interpolation, Stencil};
//!
//! let stencil = Stencil::from_ints(&[-1, 0, 1]);
//! let err = finite_difference::truncation_error(&stencil, 1).unwrap();
//! assert_eq!(err.to_string(), "-f^(3)*h**2/6");
//!
//! let eq = interpolation::equation(&Stencil::from_ints(&[-1, 1])).unwrap();
//! assert_eq!(eq.to_string(), "(f_{-1} + f_{1})/2");
//! ```
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: every coefficient is a rational number; an
//!   internal inconsistency is reported as an error, never approximated
//! - **Referential transparency**: derivations take an explicit [`Config`]
//!   and share no state

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod coords;
pub mod equation;
pub mod error;
pub mod extract;
pub mod filter;
pub mod finite_difference;
pub mod generate;
pub mod interpolation;
pub mod lagrange;
pub mod linalg;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod rationalize;
pub mod stencil;
pub mod truncation;

#[cfg(test)]
mod proptests;

pub use config::{Config, EquationOptions};
pub use error::{Error, Result};
pub use generate::{generate, Generated, GridType};
pub use rationalize::RawCoefficient;
pub use stencil::Stencil;
pub use truncation::LeadingErrorTerm;
