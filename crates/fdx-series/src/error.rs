//! Errors for series construction.

use thiserror::Error;

/// Errors raised while building series.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// The number of expansion terms was negative.
    #[error("number of expansion terms must be a natural number, got {terms}")]
    TermsNotNatural {
        /// The requested term count.
        terms: i64,
    },

    /// A derivative symbol of negative order was requested.
    #[error("order of derivative must be non-negative, got {order}")]
    NegativeDerivativeOrder {
        /// The requested order.
        order: i64,
    },
}
