//! # fdx
//!
//! Exact finite difference, interpolation and filter formulas for
//! arbitrary one-dimensional stencils.
//!
//! Given sample offsets such as `[-2, -1, 0, 1, 2]` in units of the grid
//! spacing `h`, fdx derives the weights of the discrete formula as exact
//! rationals, renders the formula, and reports its leading truncation
//! error.
//!
//! ## Features
//!
//! - **Arbitrary stencils**: integer, half-integer and one-sided offsets
//! - **Exact Arithmetic**: big rationals throughout, no floating point in
//!   the derivation
//! - **Readable Output**: plain text and LaTeX with terms in stencil order
//! - **Error Terms**: the leading term of the truncation error
//!
//! ## Quick Start
//!
//! ```rust
//! use fdx::prelude::*;
//!
//! let stencil = Stencil::from_ints(&[-1, 0, 1]);
//! let eq = finite_difference::equation(&stencil, 2).unwrap();
//! assert_eq!(eq.to_string(), "(f_{-1} - 2*f_{0} + f_{1})/h**2");
//!
//! let err = finite_difference::truncation_error(&stencil, 2).unwrap();
//! assert_eq!(err.to_string(), "-f^(4)*h**2/12");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use fdx_core as core;
pub use fdx_integers as integers;
pub use fdx_poly as poly;
pub use fdx_series as series;
pub use fdx_stencil as stencil;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use fdx_core::{Expr, Symbol};
    pub use fdx_integers::{Integer, Rational};
    pub use fdx_stencil::{
        filter, finite_difference, generate, interpolation, Config, EquationOptions, Error, Generated, GridType,
        LeadingErrorTerm, Result, Stencil,
    };
}
