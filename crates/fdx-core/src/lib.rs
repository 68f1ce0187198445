//! # fdx-core
//!
//! Expression trees for finished discretization formulas.
//!
//! This crate provides:
//! - A closed expression type ([`Expr`]) over numbers, symbols, sums,
//!   products and integer powers
//! - Subscripted symbols whose subscript can be read back from the name
//! - Plain text and LaTeX printers that never reorder terms
//! - Term ordering by stencil subscript ([`order`])
//!
//! ## Design Principles
//!
//! - **No implicit simplification**: an `Expr` prints exactly the way it was
//!   built, so the order chosen by [`order::sort_by_subscript`] survives
//! - **Pure values**: expressions own their children and never alias the
//!   derivation that produced them

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod display;
pub mod expr;
pub mod latex;
pub mod order;
pub mod symbol;

#[cfg(test)]
mod proptests;

pub use expr::Expr;
pub use order::{sort_by_subscript, OrderError};
pub use symbol::Symbol;
