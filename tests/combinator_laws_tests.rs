use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cim_bool::{and, nand, nor, not, or, xor, AsyncBoolean, BoolMono, Outcome, SourceError};
use proptest::prelude::*;

/// Source resolving to `outcome`, counting activations in `counter`
fn counted(outcome: Outcome<SourceError>, counter: &Arc<AtomicUsize>) -> BoolMono<SourceError> {
    let counter = Arc::clone(counter);
    BoolMono::defer(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        std::future::ready(outcome.clone())
    })
}

fn fixed(outcome: Outcome<SourceError>) -> BoolMono<SourceError> {
    counted(outcome, &Arc::new(AtomicUsize::new(0)))
}

/// Source resolving to `outcome`, after yielding `yields` times
fn after_yields(outcome: Outcome<SourceError>, yields: usize) -> BoolMono<SourceError> {
    BoolMono::defer(move || {
        let outcome = outcome.clone();
        async move {
            for _ in 0..yields {
                tokio::task::yield_now().await;
            }
            outcome
        }
    })
}

fn resolve<S: AsyncBoolean<Error = SourceError>>(source: S) -> Outcome<SourceError> {
    tokio_test::block_on(source.observe())
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<SourceError>> {
    prop_oneof![
        any::<bool>().prop_map(|v| Ok(Some(v))),
        Just(Ok(None)),
        "[a-z]{1,8}".prop_map(|msg| Err(SourceError::Generic(msg))),
    ]
}

proptest! {
    #[test]
    fn double_negation_is_identity(a in outcome_strategy()) {
        prop_assert_eq!(resolve(not(not(fixed(a.clone())))), a);
    }

    #[test]
    fn and_observes_right_only_after_true(a in outcome_strategy(), b in outcome_strategy()) {
        let right = Arc::new(AtomicUsize::new(0));
        let result = resolve(and(fixed(a.clone()), counted(b.clone(), &right)));

        let expected = match &a {
            Ok(Some(true)) => b,
            other => other.clone(),
        };
        prop_assert_eq!(result, expected);
        prop_assert_eq!(right.load(Ordering::SeqCst), usize::from(a == Ok(Some(true))));
    }

    #[test]
    fn or_observes_right_only_after_false(a in outcome_strategy(), b in outcome_strategy()) {
        let right = Arc::new(AtomicUsize::new(0));
        let result = resolve(or(fixed(a.clone()), counted(b.clone(), &right)));

        let expected = match &a {
            Ok(Some(false)) => b,
            other => other.clone(),
        };
        prop_assert_eq!(result, expected);
        prop_assert_eq!(right.load(Ordering::SeqCst), usize::from(a == Ok(Some(false))));
    }

    #[test]
    fn nand_is_negated_and(a in outcome_strategy(), b in outcome_strategy()) {
        let left = resolve(nand(fixed(a.clone()), fixed(b.clone())));
        let right = resolve(not(and(fixed(a), fixed(b))));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn nand_with_true_left_negates_right(b in outcome_strategy()) {
        let expected = b.clone().map(|value| value.map(|v| !v));
        prop_assert_eq!(resolve(nand(BoolMono::just(true), fixed(b))), expected);
    }

    #[test]
    fn nor_is_negated_or(a in outcome_strategy(), b in outcome_strategy()) {
        let left = resolve(nor(fixed(a.clone()), fixed(b.clone())));
        let right = resolve(not(or(fixed(a), fixed(b))));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn de_morgan_holds_for_every_outcome(a in outcome_strategy(), b in outcome_strategy()) {
        prop_assert_eq!(
            resolve(nand(fixed(a.clone()), fixed(b.clone()))),
            resolve(or(not(fixed(a.clone())), not(fixed(b.clone()))))
        );
        prop_assert_eq!(
            resolve(nor(fixed(a.clone()), fixed(b.clone()))),
            resolve(and(not(fixed(a)), not(fixed(b))))
        );
    }

    #[test]
    fn and_is_associative(
        a in outcome_strategy(),
        b in outcome_strategy(),
        c in outcome_strategy(),
    ) {
        let left = resolve(and(and(fixed(a.clone()), fixed(b.clone())), fixed(c.clone())));
        let right = resolve(and(fixed(a), and(fixed(b), fixed(c))));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn or_is_associative(
        a in outcome_strategy(),
        b in outcome_strategy(),
        c in outcome_strategy(),
    ) {
        let left = resolve(or(or(fixed(a.clone()), fixed(b.clone())), fixed(c.clone())));
        let right = resolve(or(fixed(a), or(fixed(b), fixed(c))));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn xor_is_true_when_values_differ(a in any::<bool>(), b in any::<bool>()) {
        let left = Arc::new(AtomicUsize::new(0));
        let right = Arc::new(AtomicUsize::new(0));
        let result = resolve(xor(counted(Ok(Some(a)), &left), counted(Ok(Some(b)), &right)));

        prop_assert_eq!(result, Ok(Some(a != b)));
        prop_assert_eq!(left.load(Ordering::SeqCst), 1);
        prop_assert_eq!(right.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn xor_is_commutative_on_values(a in any::<bool>(), b in any::<bool>()) {
        prop_assert_eq!(
            resolve(xor(BoolMono::just(a), BoolMono::just(b))),
            resolve(xor(BoolMono::just(b), BoolMono::just(a)))
        );
    }

    #[test]
    fn xor_without_two_values_has_no_value(a in outcome_strategy(), b in outcome_strategy()) {
        let result = resolve(xor(fixed(a.clone()), fixed(b.clone())));
        match (&a, &b) {
            (Ok(Some(x)), Ok(Some(y))) => prop_assert_eq!(result, Ok(Some(x != y))),
            (Err(_), _) | (Ok(None), _) => prop_assert_eq!(result, a),
            (Ok(Some(_)), _) => prop_assert_eq!(result, b),
        }
    }

    #[test]
    fn xor_outcome_does_not_depend_on_timing(
        a in outcome_strategy(),
        b in outcome_strategy(),
        left_yields in 0usize..3,
        right_yields in 0usize..3,
    ) {
        let result = resolve(xor(
            after_yields(a.clone(), left_yields),
            after_yields(b.clone(), right_yields),
        ));
        let expected = match (&a, &b) {
            (Ok(Some(x)), Ok(Some(y))) => Ok(Some(x != y)),
            (Ok(Some(_)), _) => b,
            _ => a,
        };
        prop_assert_eq!(result, expected);
    }
}
