//! Property-based tests for subscripts and term ordering.

#[cfg(test)]
mod tests {
    use fdx_integers::Rational;
    use proptest::prelude::*;

    use crate::expr::Expr;
    use crate::order::{sort_by_subscript, sort_terms};
    use crate::symbol::{offset_subscript, Symbol};

    fn half_offset() -> impl Strategy<Value = Rational> {
        (-40i64..40i64).prop_map(|n| Rational::from_i64(n, 2))
    }

    fn terms() -> impl Strategy<Value = Vec<Expr>> {
        proptest::collection::btree_set(-20i64..20i64, 2..8).prop_flat_map(|subs| {
            let subs: Vec<i64> = subs.into_iter().collect();
            let n = subs.len();
            (Just(subs), proptest::collection::vec(-9i64..10i64, n)).prop_map(|(subs, coeffs)| {
                subs.iter()
                    .zip(coeffs)
                    .map(|(s, c)| {
                        Expr::scaled(
                            Rational::from(c),
                            Expr::Symbol(Symbol::subscripted("f", &s.to_string())),
                        )
                    })
                    .collect()
            })
        })
    }

    proptest! {
        #[test]
        fn offset_subscript_parses_back(a in half_offset()) {
            let sym = Symbol::subscripted("f", &offset_subscript(&a));
            prop_assert_eq!(sym.subscript_value(), Some(a.to_f64()));
        }

        #[test]
        fn sorting_is_idempotent(ts in terms()) {
            let once = sort_by_subscript(&Expr::Sum(ts)).unwrap();
            let twice = sort_by_subscript(&once).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn sorting_is_a_permutation(ts in terms()) {
            let sorted = sort_terms(&Expr::Sum(ts.clone())).unwrap();
            prop_assert_eq!(sorted.len(), ts.len());
            for t in &ts {
                prop_assert!(sorted.contains(t));
            }
        }

        #[test]
        fn sorting_ignores_input_order(mut ts in terms()) {
            let forward = sort_terms(&Expr::Sum(ts.clone())).unwrap();
            ts.reverse();
            let backward = sort_terms(&Expr::Sum(ts)).unwrap();
            prop_assert_eq!(forward, backward);
        }
    }
}
