//! Property-based tests for exact arithmetic and rational approximation.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn small_rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);
            prop_assert!((a % g.clone()).is_zero());
            prop_assert!((b % g).is_zero());
        }

        #[test]
        fn gcd_times_lcm(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.gcd(&b) * a.lcm(&b), (&a * &b).abs());
        }

        #[test]
        fn rational_add_commutative(a in small_rational(), b in small_rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_distributive(a in small_rational(), b in small_rational(), c in small_rational()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn rational_inverse(a in small_rational()) {
            prop_assume!(!a.is_zero());
            prop_assert!((&a * &a.recip()).is_one());
        }

        #[test]
        fn rational_lowest_terms(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            prop_assert!(r.numerator().gcd(&r.denominator()).is_one() || r.is_zero());
            prop_assert!(!r.denominator().is_negative());
        }

        #[test]
        fn limit_denominator_recovers_small_fractions(n in small_int(), d in 1i64..5000i64) {
            #[allow(clippy::cast_precision_loss)]
            let value = n as f64 / d as f64;
            let approx = Rational::approximate_f64(value, &Integer::new(1_000_000)).unwrap();
            prop_assert_eq!(approx, Rational::from_i64(n, d));
        }

        #[test]
        fn limit_denominator_respects_bound(a in small_rational(), bound in 1i64..50i64) {
            let bound = Integer::new(bound);
            let approx = a.limit_denominator(&bound);
            prop_assert!(approx.denominator() <= bound);
        }

        #[test]
        fn limit_denominator_idempotent(a in small_rational(), bound in 1i64..50i64) {
            let bound = Integer::new(bound);
            let once = a.limit_denominator(&bound);
            prop_assert_eq!(once.limit_denominator(&bound), once);
        }
    }
}
