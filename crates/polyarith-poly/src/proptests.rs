//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::mul::{MulConfig, MulStrategy};
    use crate::polynomial::Polynomial;
    use crate::term::Term;

    // Small integer-valued coefficients keep every sum exact in f64
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    // Strategy for generating canonical polynomials (degree 0-11)
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec((small_coeff(), 0u32..12), 0..=6).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(c, d)| Term::new(c, d))
                .collect::<Polynomial>()
        })
    }

    fn negate(p: &Polynomial) -> Polynomial {
        Polynomial::from_terms(p.terms().iter().map(|t| Term::new(-t.coeff, t.degree)).collect())
    }

    proptest! {
        // Ring axioms over exact inputs

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.multiply(&b), b.multiply(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.multiply(&b.add(&c));
            let right = a.multiply(&b).add(&a.multiply(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            let one = Polynomial::constant(1.0);
            prop_assert_eq!(a.multiply(&one), a.clone());
            prop_assert_eq!(one.multiply(&a), a);
        }

        #[test]
        fn poly_mul_zero(a in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert!(a.multiply(&zero).is_zero());
            prop_assert!(zero.multiply(&a).is_zero());
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            let sum = a.add(&negate(&a));
            prop_assert!(sum.is_zero());
            prop_assert!(sum.terms().is_empty());
        }

        // Canonical form

        #[test]
        fn poly_results_canonical(a in small_poly(), b in small_poly()) {
            prop_assert!(a.is_canonical());
            prop_assert!(a.add(&b).is_canonical());
            prop_assert!(a.multiply(&b).is_canonical());
        }

        #[test]
        fn poly_mul_degree(a in small_poly(), b in small_poly()) {
            // deg(a * b) = deg(a) + deg(b) for non-zero polynomials over a field
            let product = a.multiply(&b);
            match (a.degree(), b.degree()) {
                (Some(da), Some(db)) => prop_assert_eq!(product.degree(), Some(da + db)),
                _ => prop_assert!(product.is_zero()),
            }
        }

        // Evaluation

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in -2i32..=2) {
            let x = f64::from(x);
            prop_assert_eq!(a.add(&b).evaluate(x), a.evaluate(x) + b.evaluate(x));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in -2i32..=2) {
            let x = f64::from(x);
            prop_assert_eq!(a.multiply(&b).evaluate(x), a.evaluate(x) * b.evaluate(x));
        }

        // Strategy equivalence

        #[test]
        fn strategies_match_fold(a in small_poly(), b in small_poly()) {
            let reference = a.multiply_with(&b, &MulConfig::with_strategy(MulStrategy::Fold));
            for strategy in [MulStrategy::DegreeMap, MulStrategy::Parallel, MulStrategy::Auto] {
                let result = a.multiply_with(&b, &MulConfig::with_strategy(strategy));
                prop_assert_eq!(&result, &reference);
            }
        }
    }
}
