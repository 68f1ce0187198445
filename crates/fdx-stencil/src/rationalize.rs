//! Exact rational form of a coefficient list.
//!
//! A coefficient list is reported either as exact rationals or as integer
//! numerators over one shared denominator, the least common multiple of
//! the individual denominators. Floating point entries are approximated
//! with the continued-fraction method under a denominator bound that
//! starts at 10^6 and grows tenfold until every approximation rounds back
//! to within a few ULPs of its input, up to 10^16.

use fdx_integers::{Integer, Rational};

use crate::error::{Error, Result};

/// First denominator bound tried for floating point entries.
const INITIAL_MAX_DENOMINATOR: i64 = 1_000_000;

/// Largest bound ever tried; beyond it `f64` carries no more digits.
const MAX_DENOMINATOR_EXPONENT: u32 = 16;

/// Accepted distance, in units of relative machine epsilon, between a
/// float and the double nearest to its rational form.
const ULPS: f64 = 4.0;

/// A coefficient before rationalization.
#[derive(Clone, Debug, PartialEq)]
pub enum RawCoefficient {
    /// An exact value, passed through unchanged.
    Exact(Rational),
    /// A finite-precision value that is expected to be a small rational.
    Float(f64),
}

impl From<Rational> for RawCoefficient {
    fn from(value: Rational) -> Self {
        RawCoefficient::Exact(value)
    }
}

impl From<f64> for RawCoefficient {
    fn from(value: f64) -> Self {
        RawCoefficient::Float(value)
    }
}

/// Shared-denominator form of `values`.
fn over_lcm(values: &[Rational]) -> Result<(Vec<Integer>, Integer)> {
    let denominators: Vec<Integer> = values.iter().map(Rational::denominator).collect();
    let lcm = Integer::lcm_all(&denominators);
    let scale = Rational::from(lcm.clone());
    let numerators = values
        .iter()
        .map(|r| {
            (r * &scale).to_integer().ok_or(Error::RationalizationFailed {
                max_denominator: lcm.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((numerators, lcm))
}

/// Whether every float rounds back from its rational form to within a
/// few ULPs of itself.
fn is_faithful(raw: &[RawCoefficient], numerators: &[Integer], lcm: &Integer) -> bool {
    raw.iter().zip(numerators).all(|(r, n)| match r {
        RawCoefficient::Exact(_) => true,
        RawCoefficient::Float(v) => {
            let approx = Rational::new(n.clone(), lcm.clone()).to_f64();
            (approx - v).abs() <= ULPS * f64::EPSILON * v.abs()
        }
    })
}

/// Integer numerators and their common denominator.
///
/// # Errors
///
/// Returns [`Error::RationalizationFailed`] if some float has no faithful
/// rational form with a denominator of at most 10^16.
pub fn rationalize_numer_denom(raw: &[RawCoefficient]) -> Result<(Vec<Integer>, Integer)> {
    if raw.iter().all(|r| matches!(r, RawCoefficient::Exact(_))) {
        let values: Vec<Rational> = raw
            .iter()
            .filter_map(|r| match r {
                RawCoefficient::Exact(q) => Some(q.clone()),
                RawCoefficient::Float(_) => None,
            })
            .collect();
        return over_lcm(&values);
    }

    let ten = Integer::new(10);
    let limit = ten.pow(MAX_DENOMINATOR_EXPONENT);
    let mut max_denominator = Integer::new(INITIAL_MAX_DENOMINATOR);

    while max_denominator <= limit {
        tracing::trace!(%max_denominator, "rationalizing coefficients");

        let values = raw
            .iter()
            .map(|r| match r {
                RawCoefficient::Exact(q) => Some(q.clone()),
                RawCoefficient::Float(v) => Rational::approximate_f64(*v, &max_denominator),
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| Error::RationalizationFailed {
                max_denominator: max_denominator.clone(),
            })?;

        let (numerators, lcm) = over_lcm(&values)?;
        if is_faithful(raw, &numerators, &lcm) {
            return Ok((numerators, lcm));
        }

        max_denominator = &max_denominator * &ten;
    }

    Err(Error::RationalizationFailed { max_denominator: limit })
}

/// Exact rationals with the shared minimal denominator.
///
/// # Errors
///
/// See [`rationalize_numer_denom`].
pub fn rationalize(raw: &[RawCoefficient]) -> Result<Vec<Rational>> {
    let (numerators, denominator) = rationalize_numer_denom(raw)?;
    Ok(numerators
        .into_iter()
        .map(|n| Rational::new(n, denominator.clone()))
        .collect())
}

/// Splits exact rationals into integer numerators over their LCM.
///
/// # Errors
///
/// Never fails for exact input; the `Result` mirrors
/// [`rationalize_numer_denom`].
pub fn numer_denom(values: &[Rational]) -> Result<(Vec<Integer>, Integer)> {
    over_lcm(values)
}
