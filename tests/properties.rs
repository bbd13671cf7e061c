//! Algebraic laws of the matcher contract, checked with proptest.

use proptest::prelude::*;
use testkit_match::matcher::MatcherBuilder;
use testkit_match::prelude::*;

fn leaf(kind: u8, bound: i32) -> BoxedMatcher<i32> {
    match kind % 5 {
        0 => equals(bound).boxed(),
        1 => less(bound).boxed(),
        2 => less_or_equal(bound).boxed(),
        3 => greater(bound).boxed(),
        _ => greater_or_equal(bound).boxed(),
    }
}

fn leaf_strategy() -> impl Strategy<Value = (u8, i32)> {
    (any::<u8>(), -50i32..50)
}

proptest! {
    #[test]
    fn run_match_agrees_with_predicate((kind, bound) in leaf_strategy(), value in -60i32..60) {
        let m = leaf(kind, bound);
        let result = run_match(&m, &value);
        prop_assert_eq!(result.passed(), m.matches(&value));
        if !m.matches(&value) {
            let description = m.describe();
            let explanation = m.describe_mismatch(&value);
            prop_assert_eq!(result.expected(), Some(description.as_str()));
            prop_assert_eq!(result.was(), Some(explanation.as_str()));
        }
    }

    #[test]
    fn double_negation_preserves_matching((kind, bound) in leaf_strategy(), value in -60i32..60) {
        let twice = not(not(leaf(kind, bound)));
        prop_assert_eq!(twice.matches(&value), leaf(kind, bound).matches(&value));
    }

    #[test]
    fn all_of_is_conjunction(
        leaves in prop::collection::vec(leaf_strategy(), 0..6),
        value in -60i32..60,
    ) {
        let expected = leaves.iter().all(|&(k, b)| leaf(k, b).matches(&value));
        let m = all_of(leaves.iter().map(|&(k, b)| leaf(k, b)).collect());
        prop_assert_eq!(run_match(&m, &value).passed(), expected);
    }

    #[test]
    fn any_of_is_disjunction(
        leaves in prop::collection::vec(leaf_strategy(), 0..6),
        value in -60i32..60,
    ) {
        let expected = leaves.iter().any(|&(k, b)| leaf(k, b).matches(&value));
        let m = any_of(leaves.iter().map(|&(k, b)| leaf(k, b)).collect());
        prop_assert_eq!(run_match(&m, &value).passed(), expected);
    }

    #[test]
    fn quantifiers_agree_with_iterators(
        (kind, bound) in leaf_strategy(),
        values in prop::collection::vec(-60i32..60, 0..8),
    ) {
        let inner = leaf(kind, bound);
        let every_expected = values.iter().all(|v| inner.matches(v));
        let some_expected = values.iter().any(|v| inner.matches(v));

        prop_assert_eq!(run_match(&every(leaf(kind, bound)), &values).passed(), every_expected);
        prop_assert_eq!(run_match(&some(leaf(kind, bound)), &values).passed(), some_expected);
    }

    #[test]
    fn custom_matcher_failure_text_is_verbatim(threshold in any::<i32>(), value in any::<i32>()) {
        let m = MatcherBuilder::new()
            .predicate(move |x: &i32| *x >= threshold)
            .description(format!("(at-least {threshold})"))
            .mismatch(|x: &i32| format!("got {x}"))
            .build();
        match run_match(&m, &value) {
            MatchResult::Pass => prop_assert!(value >= threshold),
            MatchResult::Fail(mismatch) => {
                prop_assert!(value < threshold);
                prop_assert_eq!(mismatch.expected, format!("(at-least {threshold})"));
                prop_assert_eq!(mismatch.was, format!("got {value}"));
            }
        }
    }
}
