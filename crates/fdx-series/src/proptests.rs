//! Property-based tests for Taylor and Laurent series.

#[cfg(test)]
mod tests {
    use fdx_integers::Rational;
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::laurent::{DerivativeForm, LaurentSeries};
    use crate::taylor::TaylorSeries;

    fn offset() -> impl Strategy<Value = Rational> {
        (-8i64..=8i64, 1i64..=2i64).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn series() -> impl Strategy<Value = LaurentSeries> {
        proptest::collection::vec((-3i32..4i32, 0u32..5u32, -20i64..20i64), 0..6).prop_map(|terms| {
            terms.into_iter().fold(LaurentSeries::zero(), |acc, (p, k, c)| {
                acc.add(&LaurentSeries::term(p, DerivativeForm::single(k, Rational::from(c))))
            })
        })
    }

    proptest! {
        #[test]
        fn taylor_ratio_of_successive_terms(a in offset(), n in 1u32..10u32) {
            // c_k = c_{k-1} * a / k
            let t = TaylorSeries::new(a.clone(), n);
            for k in 1..=n {
                let expected = &(&t.coeff(k - 1) * &a) / &Rational::from(i64::from(k));
                prop_assert_eq!(t.coeff(k), expected);
            }
        }

        #[test]
        fn symmetric_pair_cancels_odd_orders(a in offset(), n in 1u32..10u32) {
            let sum = TaylorSeries::new(a.clone(), n)
                .to_laurent()
                .add(&TaylorSeries::new(-a, n).to_laurent());
            for (p, _) in sum.terms() {
                prop_assert_eq!(p % 2, 0);
            }
        }

        #[test]
        fn laurent_sub_self_is_zero(s in series()) {
            prop_assert!(s.sub(&s).is_zero());
        }

        #[test]
        fn laurent_add_commutative(a in series(), b in series()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn shift_moves_leading_order(s in series(), k in -4i32..5i32) {
            prop_assert_eq!(s.shift(k).order(), s.order().map(|p| p + k));
        }

        #[test]
        fn scale_by_zero_vanishes(s in series()) {
            prop_assert!(s.scale(&Rational::zero()).is_zero());
        }
    }
}
