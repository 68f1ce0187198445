//! Tables of independent derivations computed in parallel.
//!
//! Every row is a self-contained derivation; rows share no state and are
//! returned in input order.

use fdx_integers::Integer;
use rayon::prelude::*;

use crate::error::Result;
use crate::finite_difference;
use crate::generate::{generate_numer_denom, GridType};
use crate::stencil::Stencil;
use crate::truncation::LeadingErrorTerm;

/// Configuration for parallel tables.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Minimum number of rows to enable parallelism.
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self { parallel_threshold: 4 }
    }
}

/// One generated formula of a coefficient table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    /// Accuracy order of the formula.
    pub acc: u32,
    /// Integer numerators in ascending stencil order.
    pub numerators: Vec<Integer>,
    /// Common denominator.
    pub denominator: Integer,
}

fn run<T, R, F>(items: &[T], config: &ParallelConfig, f: F) -> Result<Vec<R>>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> Result<R> + Sync + Send,
{
    if items.len() < config.parallel_threshold {
        items.iter().map(f).collect()
    } else {
        items.par_iter().map(f).collect()
    }
}

/// Generated central formulas of the `deriv`-th derivative, one per
/// accuracy order in `accs`.
///
/// # Errors
///
/// Returns the first error met, as [`generate_numer_denom`] would.
pub fn coefficient_table(
    deriv: u32,
    accs: &[u32],
    grid: GridType,
    config: &ParallelConfig,
) -> Result<Vec<TableRow>> {
    let _span = tracing::debug_span!("coefficient_table", deriv, rows = accs.len()).entered();
    run(accs, config, |&acc| {
        let (numerators, denominator) = generate_numer_denom(deriv, acc, grid)?;
        Ok(TableRow {
            acc,
            numerators,
            denominator,
        })
    })
}

/// Leading truncation errors of the `deriv`-th derivative, one per stencil.
///
/// # Errors
///
/// Returns the first error met, as
/// [`finite_difference::truncation_error`] would.
pub fn truncation_table(
    stencils: &[Stencil],
    deriv: u32,
    config: &ParallelConfig,
) -> Result<Vec<LeadingErrorTerm>> {
    let _span = tracing::debug_span!("truncation_table", deriv, rows = stencils.len()).entered();
    run(stencils, config, |s| finite_difference::truncation_error(s, deriv))
}
