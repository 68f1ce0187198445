//! Conversions from floating point and best rational approximation.
//!
//! `f64` values are first converted *exactly* (every finite double is a
//! dyadic rational), then [`Rational::limit_denominator`] walks the
//! continued fraction expansion to find the closest rational whose
//! denominator does not exceed a bound. This is how a noisy coefficient
//! such as `0.562_499_999_999_999_9` is recovered as `9/16`.

use num_traits::{One, Zero};

use crate::{Integer, Rational};

const MANTISSA_BITS: u32 = 52;
const EXPONENT_BIAS: i32 = 1075;
const SUBNORMAL_EXPONENT: i32 = -1074;

impl Rational {
    /// Converts a finite `f64` to the rational it represents exactly.
    ///
    /// Returns `None` for NaN and the infinities.
    #[must_use]
    pub fn from_f64_exact(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        if value == 0.0 {
            return Some(Self::zero());
        }

        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        let biased = i32::try_from((bits >> MANTISSA_BITS) & 0x7ff).ok()?;
        let fraction = bits & ((1u64 << MANTISSA_BITS) - 1);

        let (mantissa, exponent) = if biased == 0 {
            (fraction, SUBNORMAL_EXPONENT)
        } else {
            (fraction | (1u64 << MANTISSA_BITS), biased - EXPONENT_BIAS)
        };

        let mut numerator = Integer::from(mantissa);
        if negative {
            numerator = -numerator;
        }
        let scale = Integer::new(2).pow(exponent.unsigned_abs());

        Some(if exponent >= 0 {
            Self::from_integer(numerator * scale)
        } else {
            Self::new(numerator, scale)
        })
    }

    /// Closest rational to `self` whose denominator is at most `max_denominator`.
    ///
    /// Ties between the last convergent and the best semiconvergent go to
    /// the convergent. A bound below 1 is treated as 1.
    #[must_use]
    pub fn limit_denominator(&self, max_denominator: &Integer) -> Self {
        let one = Integer::one();
        let bound = if *max_denominator < one {
            one.clone()
        } else {
            max_denominator.clone()
        };

        if self.denominator() <= bound {
            return self.clone();
        }

        let negative = self.is_negative();
        let target = self.abs();

        let (mut p0, mut q0, mut p1, mut q1) =
            (Integer::zero(), one.clone(), one.clone(), Integer::zero());
        let mut n = target.numerator();
        let mut d = target.denominator();

        loop {
            let a = &n / &d;
            let q2 = &q0 + &(&a * &q1);
            if q2 > bound {
                break;
            }
            let p2 = &p0 + &(&a * &p1);
            (p0, q0, p1, q1) = (p1, q1, p2, q2);
            let r = &n - &(&a * &d);
            n = d;
            d = r;
        }

        let k = (&bound - &q0) / q1.clone();
        let semiconvergent = Self::new(&p0 + &(&k * &p1), &q0 + &(&k * &q1));
        let convergent = Self::new(p1, q1);

        let best = if (&convergent - &target).abs() <= (&semiconvergent - &target).abs() {
            convergent
        } else {
            semiconvergent
        };

        if negative {
            -best
        } else {
            best
        }
    }

    /// Best rational approximation of a finite `f64` with a bounded denominator.
    #[must_use]
    pub fn approximate_f64(value: f64, max_denominator: &Integer) -> Option<Self> {
        Self::from_f64_exact(value).map(|exact| exact.limit_denominator(max_denominator))
    }
}
