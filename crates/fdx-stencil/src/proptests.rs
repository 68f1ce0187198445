//! Property-based tests for stencil derivations.

#[cfg(test)]
mod tests {
    use fdx_integers::{Integer, Rational};
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::rationalize::{rationalize, rationalize_numer_denom, RawCoefficient};
    use crate::{finite_difference, interpolation, Stencil};

    /// Distinct integer offsets in `-6..=6`, in arbitrary order.
    fn stencil(min: usize, max: usize) -> impl Strategy<Value = Vec<i64>> {
        proptest::sample::subsequence((-6i64..=6).collect::<Vec<_>>(), min..=max).prop_shuffle()
    }

    fn rationals() -> impl Strategy<Value = Vec<Rational>> {
        proptest::collection::vec((-50i64..50, 1i64..30), 0..8)
            .prop_map(|v| v.into_iter().map(|(n, d)| Rational::from_i64(n, d)).collect())
    }

    fn exact(values: &[Rational]) -> Vec<RawCoefficient> {
        values.iter().cloned().map(RawCoefficient::Exact).collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn coefficient_count_matches_width(offsets in stencil(2, 6), deriv in 1u32..4) {
            let c = finite_difference::coefficients(&Stencil::from_ints(&offsets), deriv).unwrap();
            prop_assert_eq!(c.len(), offsets.len());
        }

        #[test]
        fn consistent_with_derivative(offsets in stencil(2, 6), deriv in 1u32..4) {
            // Σ cᵢ aᵢᵏ = d! δₖ,d for every k below the stencil width
            let stencil = Stencil::from_ints(&offsets);
            let c = finite_difference::coefficients(&stencil, deriv).unwrap();
            let sorted = stencil.sorted();
            for k in 0..u32::try_from(offsets.len()).unwrap() {
                let moment: Rational = c.iter().zip(&sorted).map(|(ci, a)| ci * &a.pow(k)).sum();
                let expected = if k == deriv {
                    Rational::from((1..=i64::from(deriv)).product::<i64>())
                } else {
                    Rational::zero()
                };
                prop_assert_eq!(moment, expected);
            }
        }

        #[test]
        fn shuffling_does_not_change_result(offsets in stencil(2, 6)) {
            let mut sorted = offsets.clone();
            sorted.sort_unstable();
            prop_assert_eq!(
                finite_difference::coefficients(&Stencil::from_ints(&offsets), 1).unwrap(),
                finite_difference::coefficients(&Stencil::from_ints(&sorted), 1).unwrap()
            );
        }

        #[test]
        fn central_symmetry(k in 1i64..5, deriv in 1u32..5) {
            let offsets: Vec<i64> = (-k..=k).collect();
            let c = finite_difference::coefficients(&Stencil::from_ints(&offsets), deriv).unwrap();
            let n = c.len();
            for i in 0..n {
                if deriv % 2 == 1 {
                    prop_assert_eq!(&c[i], &-&c[n - 1 - i]);
                } else {
                    prop_assert_eq!(&c[i], &c[n - 1 - i]);
                }
            }
            if deriv % 2 == 1 {
                prop_assert!(c[n / 2].is_zero());
            }
        }

        #[test]
        fn numer_denom_round_trip(offsets in stencil(2, 6), deriv in 1u32..4) {
            let stencil = Stencil::from_ints(&offsets);
            let c = finite_difference::coefficients(&stencil, deriv).unwrap();
            let (n, d) = finite_difference::coefficients_numer_denom(&stencil, deriv).unwrap();
            let rebuilt: Vec<Rational> = n.into_iter().map(|v| Rational::new(v, d.clone())).collect();
            prop_assert_eq!(rebuilt, c);
        }

        #[test]
        fn interpolation_weights_sum_to_one(offsets in stencil(2, 6)) {
            let offsets: Vec<i64> = offsets.into_iter().filter(|&a| a != 0).collect();
            prop_assume!(offsets.len() >= 2);
            let c = interpolation::coefficients(&Stencil::from_ints(&offsets)).unwrap();
            let total: Rational = c.into_iter().sum();
            prop_assert_eq!(total, Rational::from(1));
        }

        #[test]
        fn truncation_error_has_positive_order(offsets in stencil(2, 6)) {
            let err = finite_difference::truncation_error(&Stencil::from_ints(&offsets), 1).unwrap();
            prop_assert!(err.accuracy() >= 1);
        }

        #[test]
        fn rationalize_is_idempotent(values in rationals()) {
            let once = rationalize(&exact(&values)).unwrap();
            let twice = rationalize(&exact(&once)).unwrap();
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(once, values);
        }

        #[test]
        fn common_denominator_is_lcm(values in rationals()) {
            let (_, d) = rationalize_numer_denom(&exact(&values)).unwrap();
            let denominators: Vec<Integer> = values.iter().map(Rational::denominator).collect();
            prop_assert_eq!(d, Integer::lcm_all(&denominators));
        }
    }
}
