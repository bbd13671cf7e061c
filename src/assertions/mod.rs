//! Assertion macros built on the matcher engine.
//!
//! - [`assert_that!`] - Panic with the formatted mismatch when a value fails
//! - [`all_of!`] / [`any_of!`] - Combine matchers of different types
//!
//! # Example
//!
//! ```rust
//! use testkit_match::{all_of, assert_that};
//! use testkit_match::matcher::{greater, less, not, equals};
//!
//! assert_that!(42, all_of![greater(0), less(100), not(equals(13))]);
//! ```

/// Assert that a value matches a matcher.
///
/// # Panics
///
/// Panics with the expected/actual message if the value doesn't match, or
/// if the matcher is malformed.
///
/// # Example
///
/// ```rust
/// use testkit_match::{assert_that, matcher::equals};
///
/// assert_that!(42, equals(42));
/// assert_that!(42, equals(42), "answer for {}", "everything");
/// ```
#[macro_export]
macro_rules! assert_that {
    ($value:expr, $matcher:expr $(,)?) => {{
        if let $crate::engine::MatchResult::Fail(mismatch) =
            $crate::engine::run_match(&$matcher, &$value)
        {
            panic!("assertion failed: {}{}", stringify!($value), mismatch);
        }
    }};
    ($value:expr, $matcher:expr, $($arg:tt)+) => {{
        if let $crate::engine::MatchResult::Fail(mismatch) =
            $crate::engine::run_match(&$matcher, &$value)
        {
            panic!(
                "assertion failed: {}{}\n  message: {}",
                stringify!($value),
                mismatch,
                format_args!($($arg)+)
            );
        }
    }};
}

/// Box each matcher and combine them with [`all_of`](crate::matcher::all_of).
///
/// ```rust
/// use testkit_match::all_of;
/// use testkit_match::matcher::{equals, less_or_equal, Matcher};
///
/// let m = all_of![equals(1), less_or_equal(2)];
/// assert_eq!(m.describe(), "(all-of (= 1) (<= 2))");
/// ```
#[macro_export]
macro_rules! all_of {
    ($($matcher:expr),* $(,)?) => {
        $crate::matcher::all_of(::std::vec![$($crate::matcher::MatcherExt::boxed($matcher)),*])
    };
}

/// Box each matcher and combine them with [`any_of`](crate::matcher::any_of).
///
/// ```rust
/// use testkit_match::any_of;
/// use testkit_match::matcher::{equals, is_empty, Matcher};
///
/// let m = any_of![is_empty(), equals(vec![7])];
/// assert!(m.matches(&vec![7]));
/// assert!(m.matches(&vec![]));
/// ```
#[macro_export]
macro_rules! any_of {
    ($($matcher:expr),* $(,)?) => {
        $crate::matcher::any_of(::std::vec![$($crate::matcher::MatcherExt::boxed($matcher)),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::matcher::{
        contains_str, equals, every, greater, has_count, includes, is_empty, not, Matcher,
    };

    #[test]
    fn test_assert_that_macro() {
        assert_that!(42, equals(42));
        assert_that!(50, all_of![greater(0), not(equals(13))]);
        assert_that!("hello", contains_str("ell"));
        assert_that!(vec![1, 2], all_of![has_count(2), includes(2), every(greater(0))]);
    }

    #[test]
    #[should_panic(expected = "assertion failed: 42\nExpected: (= 0)\n     but: was 42")]
    fn test_assert_that_fails() {
        assert_that!(42, equals(0));
    }

    #[test]
    #[should_panic(expected = "message: checking 3")]
    fn test_assert_that_custom_message() {
        assert_that!(2, equals(3), "checking {}", 3);
    }

    #[test]
    fn test_macro_combinators_box_heterogeneous_matchers() {
        let m = any_of![is_empty(), has_count(3)];
        assert!(m.matches(&vec![1, 2, 3]));
        assert!(!m.matches(&vec![1]));
        assert_eq!(m.describe(), "(any-of (empty?) (has-count 3))");

        let none = all_of![];
        assert!(Matcher::<u8>::matches(&none, &0));
    }
}
