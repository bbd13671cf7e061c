//! Running matchers against values.
//!
//! [`run_match`] is the single entry point used by assertions: it checks
//! the matcher's shape, evaluates it and captures the outcome as a
//! [`MatchResult`]. A failing value is an ordinary result; only a
//! malformed matcher aborts.
//!
//! # Example
//!
//! ```rust
//! use testkit_match::engine::{run_match, MatchResult};
//! use testkit_match::matcher::equals;
//!
//! assert_eq!(run_match(&equals(1), &1), MatchResult::Pass);
//!
//! let result = run_match(&equals(1), &2);
//! assert_eq!(result.expected(), Some("(= 1)"));
//! assert_eq!(result.was(), Some("was 2"));
//! ```

use std::fmt;

use tracing::{debug, error, trace};

use crate::error::{Error, Result};
use crate::matcher::Matcher;

mod message;

pub use message::{format_message, MessageFormat};

/// Why a value failed a matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Mismatch {
    /// The matcher's description, verbatim.
    pub expected: String,
    /// The matcher's explanation for the failing value.
    pub was: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_message(self))
    }
}

/// Outcome of running a matcher against one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// The value satisfied the matcher.
    Pass,
    /// The value did not satisfy the matcher.
    Fail(Mismatch),
}

impl MatchResult {
    /// Whether the value satisfied the matcher.
    #[must_use]
    pub fn passed(&self) -> bool {
        matches!(self, MatchResult::Pass)
    }

    /// The mismatch, if the value failed.
    #[must_use]
    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            MatchResult::Pass => None,
            MatchResult::Fail(mismatch) => Some(mismatch),
        }
    }

    /// The matcher's description, if the value failed.
    #[must_use]
    pub fn expected(&self) -> Option<&str> {
        self.mismatch().map(|m| m.expected.as_str())
    }

    /// The mismatch explanation, if the value failed.
    #[must_use]
    pub fn was(&self) -> Option<&str> {
        self.mismatch().map(|m| m.was.as_str())
    }

    /// The two-line failure message, if the value failed.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.mismatch().map(format_message)
    }

    /// Turn a failure into [`Error::AssertionFailed`] for `?`-style tests.
    ///
    /// # Errors
    ///
    /// Returns the formatted message when the value failed.
    pub fn into_result(self) -> Result<()> {
        match self {
            MatchResult::Pass => Ok(()),
            MatchResult::Fail(mismatch) => Err(Error::assertion_failed(format_message(&mismatch))),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MatchResult {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        match self {
            MatchResult::Pass => {
                let mut state = serializer.serialize_struct("MatchResult", 1)?;
                state.serialize_field("pass", &true)?;
                state.end()
            }
            MatchResult::Fail(mismatch) => {
                let mut state = serializer.serialize_struct("MatchResult", 3)?;
                state.serialize_field("pass", &false)?;
                state.serialize_field("expected", &mismatch.expected)?;
                state.serialize_field("was", &mismatch.was)?;
                state.end()
            }
        }
    }
}

/// Run a matcher, reporting a malformed matcher as an error.
///
/// # Errors
///
/// Returns [`Error::MalformedMatcher`] if the matcher, or any matcher
/// nested in it, is missing part of its contract. Nothing is evaluated in
/// that case.
pub fn try_run_match<T, M>(matcher: &M, value: &T) -> Result<MatchResult>
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    if let Err(err) = matcher.check_shape() {
        debug!(%err, "matcher failed shape check");
        return Err(err);
    }

    if matcher.matches(value) {
        trace!("value matched");
        return Ok(MatchResult::Pass);
    }

    let mismatch = Mismatch {
        expected: matcher.describe(),
        was: matcher.describe_mismatch(value),
    };
    debug!(expected = %mismatch.expected, was = %mismatch.was, "value did not match");
    Ok(MatchResult::Fail(mismatch))
}

/// Run a matcher against a value.
///
/// # Panics
///
/// Panics if the matcher is malformed. That is a bug in how the matcher
/// was built, never a property of the value.
pub fn run_match<T, M>(matcher: &M, value: &T) -> MatchResult
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    match try_run_match(matcher, value) {
        Ok(result) => result,
        Err(err) => {
            error!(%err, "refusing to run malformed matcher");
            panic!("{err}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;
    use crate::matcher::{
        all_of, any_of, equals, every, has_count, less_or_equal, not, MatcherBuilder, MatcherExt,
    };

    fn fail(expected: &str, was: &str) -> MatchResult {
        MatchResult::Fail(Mismatch {
            expected: expected.to_string(),
            was: was.to_string(),
        })
    }

    #[test]
    fn test_pass() {
        assert_eq!(run_match(&equals(1), &1), MatchResult::Pass);
        assert!(run_match(&equals(1), &1).passed());
    }

    #[test]
    fn test_fail_captures_description_and_mismatch() {
        assert_eq!(run_match(&equals(1), &2), fail("(= 1)", "was 2"));
    }

    #[test]
    fn test_combinators() {
        let both = all_of(vec![equals(1).boxed(), less_or_equal(2).boxed()]);
        assert_eq!(run_match(&both, &1), MatchResult::Pass);

        let either = any_of(vec![equals(3).boxed(), equals(2).boxed()]);
        assert_eq!(run_match(&either, &1), fail("(any-of (= 3) (= 2))", "was 1"));

        assert_eq!(run_match(&not(equals(2)), &1), MatchResult::Pass);
    }

    #[test]
    fn test_has_count_on_vec() {
        assert_eq!(run_match(&has_count(2), &vec![1]), fail("(has-count 2)", "was [1]"));
    }

    #[test]
    fn test_accessors_on_pass_are_empty() {
        let result = run_match(&equals(1), &1);
        assert_eq!(result.mismatch(), None);
        assert_eq!(result.expected(), None);
        assert_eq!(result.was(), None);
        assert_eq!(result.message(), None);
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_into_result_carries_message() {
        let err = run_match(&equals(1), &2).into_result().unwrap_err();
        assert_eq!(
            err,
            Error::AssertionFailed("\nExpected: (= 1)\n     but: was 2".to_string())
        );
    }

    #[test]
    fn test_try_run_match_reports_malformed() {
        let m = MatcherBuilder::new().predicate(|x: &i32| *x == 1).build();
        assert_eq!(
            try_run_match(&m, &1),
            Err(Error::MalformedMatcher {
                missing: vec![Field::Description, Field::DescribeMismatch]
            })
        );
    }

    #[test]
    #[should_panic(expected = "Malformed matcher: missing `describe-mismatch`")]
    fn test_malformed_matcher_aborts_even_when_value_would_pass() {
        let m = MatcherBuilder::new()
            .predicate(|x: &i32| *x == 1)
            .description("(one?)")
            .build();
        let _ = run_match(&m, &1);
    }

    #[test]
    #[should_panic(expected = "Malformed matcher: missing `match`")]
    fn test_malformed_child_aborts_through_combinator() {
        let broken = MatcherBuilder::new()
            .description("(broken)")
            .mismatch(|x: &i32| format!("was {x}"))
            .build();
        let m = any_of(vec![equals(1).boxed(), broken.boxed()]);
        let _ = run_match(&m, &1);
    }

    #[test]
    fn test_try_run_match_reports_malformed_child() {
        let no_description = MatcherBuilder::new()
            .predicate(|x: &i32| *x == 2)
            .mismatch(|x: &i32| format!("was {x}"))
            .build();
        let m = crate::any_of![equals(1), no_description];
        assert_eq!(m.describe(), "(any-of (= 1) <malformed>)");
        assert_eq!(
            try_run_match(&m, &1),
            Err(Error::MalformedMatcher {
                missing: vec![Field::Description]
            })
        );
    }

    #[test]
    fn test_try_run_match_reports_malformed_grandchild() {
        let broken = MatcherBuilder::<i32>::new().build();
        let m = every(not(broken));
        assert_eq!(
            try_run_match(&m, &vec![1, 2]),
            Err(Error::MalformedMatcher {
                missing: vec![Field::Match, Field::Description, Field::DescribeMismatch]
            })
        );
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_serialized_shape() {
        use serde_json::json;

        let pass = serde_json::to_value(run_match(&equals(1), &1)).unwrap();
        assert_eq!(pass, json!({"pass": true}));

        let fail = serde_json::to_value(run_match(&equals(1), &2)).unwrap();
        assert_eq!(fail, json!({"pass": false, "expected": "(= 1)", "was": "was 2"}));
    }

    #[test]
    fn test_trait_object_matcher() {
        let m: &dyn Matcher<i32> = &equals(5);
        assert!(run_match(m, &5).passed());
    }
}
