//! Error types for stencil derivations.

use fdx_core::OrderError;
use fdx_integers::{Integer, Rational};
use fdx_series::SeriesError;
use thiserror::Error;

/// Result type for stencil derivations.
pub type Result<T> = std::result::Result<T, Error>;

fn offsets(values: &[Rational]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Errors raised by stencil derivations.
///
/// Validation errors are returned before any algebra is done. The
/// remaining variants report an internal inconsistency in a derivation and
/// are never replaced by an approximate answer.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// Fewer points than the configured minimum width.
    #[error("stencil width {width} is narrower than the minimum width {minimum}")]
    TooNarrow {
        /// Number of points supplied.
        width: usize,
        /// Configured minimum.
        minimum: usize,
    },

    /// Some offset occurs more than once.
    #[error("stencil has duplicated points: {}", offsets(.duplicates))]
    DuplicatedPoint {
        /// Each duplicated value, listed once.
        duplicates: Vec<Rational>,
    },

    /// An interpolation stencil contains the interpolation point.
    #[error("interpolation stencil {} must not contain 0", offsets(.stencil))]
    ContainsZero {
        /// The offending stencil.
        stencil: Vec<Rational>,
    },

    /// Two paired lists have different lengths.
    #[error("data sets have inconsistent lengths {left} and {right}")]
    InconsistentDataSet {
        /// Length of the first list.
        left: usize,
        /// Length of the second list.
        right: usize,
    },

    /// A Lagrangian basis of degree below 1 was requested.
    #[error("degree of the Lagrangian basis must be a natural number, got {degree}")]
    DegreeNotNatural {
        /// The requested degree.
        degree: usize,
    },

    /// A basis polynomial index outside the stencil.
    #[error("point index {point} is out of range for {len} points")]
    PointOutOfRange {
        /// Requested index.
        point: usize,
        /// Number of points.
        len: usize,
    },

    /// Derivative orders start at 1 for finite differences.
    #[error("order of derivative must be a natural number, got {order}")]
    UnsupportedOrderOfDerivative {
        /// The requested order.
        order: u32,
    },

    /// Accuracy orders for generated central formulas are even and at least 2.
    #[error("order of accuracy must be an even number >= 2, got {acc}")]
    InvalidAccuracyOrder {
        /// The requested order.
        acc: u32,
    },

    /// Unknown grid type name.
    #[error("unsupported grid type `{name}`; expected regular, cell_centered or staggered")]
    InvalidGridType {
        /// The name that failed to parse.
        name: String,
    },

    /// A stencil offset was NaN or infinite.
    #[error("stencil offset {value} is not finite")]
    InvalidOffset {
        /// The offending value.
        value: f64,
    },

    /// Series construction failed.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Term ordering failed.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// The interpolant denominator did not reduce to a single term.
    #[error("interpolant denominator has {terms} terms, expected exactly one")]
    UnexpectedDenominator {
        /// Number of terms found.
        terms: usize,
    },

    /// A numerator term could not be divided by the denominator.
    #[error("numerator of unknown {index} is not divisible by the interpolant denominator")]
    NonMonomialDivision {
        /// Position of the unknown.
        index: usize,
    },

    /// A raw coefficient kept more than one power of the spacing.
    #[error("coefficient of unknown {index} has {terms} spacing terms, expected at most one")]
    UnexpectedSpacingPower {
        /// Position of the unknown.
        index: usize,
        /// Number of terms found.
        terms: usize,
    },

    /// No exact rational form was found within double precision.
    #[error("coefficients could not be rationalized with denominators up to {max_denominator}")]
    RationalizationFailed {
        /// The last bound tried.
        max_denominator: Integer,
    },

    /// A term below the leading error order survived.
    #[error("terms of order h^{power} did not cancel")]
    UncancelledLowerOrder {
        /// Exponent of the surviving term.
        power: i32,
    },

    /// Every expansion term cancelled.
    #[error("no truncation error term survived {terms} expansion terms")]
    TruncationTermsExhausted {
        /// Number of Taylor terms used.
        terms: u32,
    },
}
