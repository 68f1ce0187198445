//! Stencils and their validation.
//!
//! A [`Stencil`] is the caller's list of sample offsets, in units of the
//! grid spacing, exactly as given. Validation never touches that list; it
//! returns a sorted copy that the rest of the pipeline consumes.

use fdx_integers::{Integer, Rational};
use num_traits::Zero;
use std::fmt;

use crate::config::Config;
use crate::error::{Error, Result};

/// Denominator bound used when reading offsets from `f64`.
const OFFSET_MAX_DENOMINATOR: i64 = 1_000_000;

/// Sample offsets in units of the grid spacing.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Stencil {
    offsets: Vec<Rational>,
}

impl Stencil {
    /// A stencil from exact offsets, in the given order.
    #[must_use]
    pub fn new(offsets: Vec<Rational>) -> Self {
        Self { offsets }
    }

    /// A stencil of integer offsets.
    #[must_use]
    pub fn from_ints(offsets: &[i64]) -> Self {
        Self::new(offsets.iter().map(|&a| Rational::from(a)).collect())
    }

    /// A stencil from floating point offsets.
    ///
    /// Each offset is replaced by the closest rational with denominator at
    /// most 10^6, so `0.5` and `-1.5` are exact and `0.1` becomes `1/10`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOffset`] for NaN or infinite offsets.
    pub fn from_f64s(offsets: &[f64]) -> Result<Self> {
        let bound = Integer::new(OFFSET_MAX_DENOMINATOR);
        offsets
            .iter()
            .map(|&value| Rational::approximate_f64(value, &bound).ok_or(Error::InvalidOffset { value }))
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// The offsets in caller order.
    #[must_use]
    pub fn offsets(&self) -> &[Rational] {
        &self.offsets
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns true for an empty stencil.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Returns true if some offset is exactly zero.
    #[must_use]
    pub fn contains_zero(&self) -> bool {
        self.offsets.iter().any(Rational::is_zero)
    }

    /// Offsets occurring more than once, each listed once, ascending.
    #[must_use]
    pub fn duplicates(&self) -> Vec<Rational> {
        let sorted = self.sorted();
        let mut dups: Vec<Rational> = sorted
            .windows(2)
            .filter(|w| w[0] == w[1])
            .map(|w| w[0].clone())
            .collect();
        dups.dedup();
        dups
    }

    /// The offsets sorted ascending.
    #[must_use]
    pub fn sorted(&self) -> Vec<Rational> {
        let mut sorted = self.offsets.clone();
        sorted.sort();
        sorted
    }

    /// Checks width and distinctness and returns the sorted offsets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooNarrow`] or [`Error::DuplicatedPoint`].
    pub fn validate(&self, config: &Config) -> Result<Vec<Rational>> {
        let minimum = config.required_width();
        if self.len() < minimum {
            return Err(Error::TooNarrow {
                width: self.len(),
                minimum,
            });
        }

        let duplicates = self.duplicates();
        if !duplicates.is_empty() {
            return Err(Error::DuplicatedPoint { duplicates });
        }

        Ok(self.sorted())
    }

    /// As [`Stencil::validate`], additionally rejecting the origin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooNarrow`], [`Error::DuplicatedPoint`] or
    /// [`Error::ContainsZero`].
    pub fn validate_for_interpolation(&self, config: &Config) -> Result<Vec<Rational>> {
        let sorted = self.validate(config)?;
        if self.contains_zero() {
            return Err(Error::ContainsZero { stencil: self.offsets.clone() });
        }
        Ok(sorted)
    }
}

impl From<Vec<Rational>> for Stencil {
    fn from(offsets: Vec<Rational>) -> Self {
        Self::new(offsets)
    }
}

impl From<&[i64]> for Stencil {
    fn from(offsets: &[i64]) -> Self {
        Self::from_ints(offsets)
    }
}

impl<const N: usize> From<[i64; N]> for Stencil {
    fn from(offsets: [i64; N]) -> Self {
        Self::from_ints(&offsets)
    }
}

impl fmt::Display for Stencil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.offsets.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", items.join(", "))
    }
}
