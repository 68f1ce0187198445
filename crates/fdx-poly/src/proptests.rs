//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use fdx_integers::Rational;
    use proptest::prelude::*;

    use crate::monomial::Monomial;
    use crate::sparse::SparsePoly;

    fn small_coeff() -> impl Strategy<Value = Rational> {
        (-50i64..50i64, 1i64..6i64).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn small_monomial() -> impl Strategy<Value = Monomial> {
        (0u32..4u32, -3i32..4i32).prop_map(|(x, h)| Monomial::new(x, h))
    }

    fn small_poly() -> impl Strategy<Value = SparsePoly> {
        proptest::collection::vec((small_monomial(), small_coeff()), 0..=5).prop_map(SparsePoly::new)
    }

    fn small_offset() -> impl Strategy<Value = Rational> {
        (-6i64..=6i64, 1i64..=2i64).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn poly_sub_self_is_zero(a in small_poly()) {
            prop_assert!(a.sub(&a).is_zero());
        }

        #[test]
        fn derivative_is_linear(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).derivative(), a.derivative().add(&b.derivative()));
        }

        #[test]
        fn derivative_leibniz(a in small_poly(), b in small_poly()) {
            // (ab)' = a'b + ab'
            let lhs = a.mul(&b).derivative();
            let rhs = a.derivative().mul(&b).add(&a.mul(&b.derivative()));
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn div_term_inverts_mul_term(a in small_poly(), m in small_monomial(), c in small_coeff()) {
            prop_assume!(!num_traits::Zero::is_zero(&c));
            let divisor = SparsePoly::term(m, c.clone());
            prop_assert_eq!(a.mul_term(&m, &c).div_term(&divisor), Some(a));
        }

        #[test]
        fn linear_factor_vanishes_at_its_root(a in small_offset(), b in small_offset()) {
            let p = SparsePoly::x_minus_offset(&a).mul(&SparsePoly::x_minus_offset(&b));
            prop_assert!(p.at_offset(&a).is_zero());
            prop_assert!(p.at_offset(&b).is_zero());
        }
    }
}
