// Allow must_use_candidate for matcher factory functions since returning the matcher
// without using it is the common pattern for test setup
#![allow(clippy::must_use_candidate)]

//! The matcher contract and everything built on it.
//!
//! - [`Matcher`] trait: a predicate, a static description and a mismatch
//!   explanation, for one value type
//! - Leaf matchers: [`equals`], [`less`], [`greater`], [`is_empty`],
//!   [`has_count`], [`includes`], [`instance_of`], ...
//! - Combinators: [`all_of`], [`any_of`], [`not`], [`some`], [`every`]
//! - Ad-hoc matchers: [`matcher_fn`] and [`MatcherBuilder`]
//!
//! # Example
//!
//! ```rust
//! use testkit_match::matcher::{all_of, equals, less_or_equal, not, Matcher, MatcherExt};
//!
//! let m = all_of(vec![equals(1).boxed(), less_or_equal(2).boxed()]);
//! assert!(m.matches(&1));
//! assert_eq!(m.describe(), "(all-of (= 1) (<= 2))");
//!
//! let m = not(equals(2));
//! assert!(m.matches(&1));
//! ```

use std::sync::Arc;

use crate::error::Result;

mod combinator;
mod custom;
pub mod describe;
mod kind;
mod leaf;

pub use combinator::{all_of, any_of, every, not, some, AllOf, AnyOf, Every, Not, SomeOf};
pub use custom::{matcher_fn, FnMatcher, MatcherBuilder};
pub use kind::{
    instance_of, is_char, is_keyword, is_map, is_nil, is_sequence, is_set, is_string, is_symbol,
    is_vector, Kind, KindMatcher, Typed,
};
pub use leaf::{
    anything, contains_str, ends_with, equals, greater, greater_or_equal, has_count, includes,
    is_empty, less, less_or_equal, satisfies, starts_with, Anything, Compare, Comparison, Equals,
    HasCount, Includes, IsEmpty, Satisfies, StrMatcher,
};

/// A self-describing predicate over values of type `T`.
///
/// Matchers compose: every leaf and every combinator implements this one
/// trait, so any matcher can be nested inside any combinator.
///
/// # Implementing Custom Matchers
///
/// ```rust
/// use testkit_match::matcher::Matcher;
///
/// struct IsEven;
///
/// impl Matcher<i32> for IsEven {
///     fn matches(&self, value: &i32) -> bool {
///         value % 2 == 0
///     }
///
///     fn describe(&self) -> String {
///         "(even?)".to_string()
///     }
///
///     fn describe_mismatch(&self, value: &i32) -> String {
///         format!("was {value:?}")
///     }
/// }
///
/// let m = IsEven;
/// assert!(m.matches(&4));
/// assert!(!m.matches(&3));
/// ```
pub trait Matcher<T: ?Sized> {
    /// Check if the value matches.
    fn matches(&self, value: &T) -> bool;

    /// Describe what this matcher expects.
    fn describe(&self) -> String;

    /// Describe why a value didn't match.
    ///
    /// Only meaningful when [`matches`](Matcher::matches) returned `false`.
    fn describe_mismatch(&self, value: &T) -> String;

    /// Verify that every part of the contract is present.
    ///
    /// Matchers backed by a struct always are; only ad-hoc matchers and
    /// combinators wrapping them override this.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedMatcher`](crate::Error::MalformedMatcher)
    /// naming the missing parts.
    fn check_shape(&self) -> Result<()> {
        Ok(())
    }
}

/// A type-erased matcher that can be shared across threads.
pub type BoxedMatcher<T> = Box<dyn Matcher<T> + Send + Sync>;

/// Conversions available on every sized matcher.
pub trait MatcherExt<T: ?Sized>: Matcher<T> + Sized {
    /// Erase the concrete type so matchers of different kinds can share a list.
    fn boxed(self) -> BoxedMatcher<T>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }

    /// Wrap in an [`Arc`] so one matcher can be reused by several trees.
    fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl<T: ?Sized, M: Matcher<T>> MatcherExt<T> for M {}

// Implement Matcher for Box<dyn Matcher> to allow nesting
impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for Box<M> {
    fn matches(&self, value: &T) -> bool {
        (**self).matches(value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn describe_mismatch(&self, value: &T) -> String {
        (**self).describe_mismatch(value)
    }

    fn check_shape(&self) -> Result<()> {
        (**self).check_shape()
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for Arc<M> {
    fn matches(&self, value: &T) -> bool {
        (**self).matches(value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn describe_mismatch(&self, value: &T) -> String {
        (**self).describe_mismatch(value)
    }

    fn check_shape(&self) -> Result<()> {
        (**self).check_shape()
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    fn matches(&self, value: &T) -> bool {
        (**self).matches(value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn describe_mismatch(&self, value: &T) -> String {
        (**self).describe_mismatch(value)
    }

    fn check_shape(&self) -> Result<()> {
        (**self).check_shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_forwards_contract() {
        let m: BoxedMatcher<i32> = equals(3).boxed();
        assert!(m.matches(&3));
        assert!(!m.matches(&4));
        assert_eq!(m.describe(), "(= 3)");
        assert_eq!(m.describe_mismatch(&4), "was 4");
        assert!(m.check_shape().is_ok());
    }

    #[test]
    fn test_shared_matcher_reused_in_two_trees() {
        let positive = greater(0).shared();
        let small = all_of(vec![positive.clone().boxed(), less(10).boxed()]);
        let huge = all_of(vec![positive.boxed(), greater(1000).boxed()]);

        assert!(small.matches(&5));
        assert!(!small.matches(&50));
        assert!(huge.matches(&5000));
        assert_eq!(huge.describe(), "(all-of (> 0) (> 1000))");
    }

    #[test]
    fn test_reference_is_a_matcher() {
        let m = equals("a".to_string());
        let by_ref = &m;
        assert!(by_ref.matches(&"a".to_string()));
        assert_eq!(Matcher::<String>::describe(&by_ref), "(= \"a\")");
    }

    #[test]
    fn test_matchers_are_send_and_sync() {
        fn assert_send_sync<M: Send + Sync>(_: &M) {}

        assert_send_sync(&equals(1));
        assert_send_sync(&all_of(vec![equals(1).boxed(), greater(0).boxed()]));
        let quantified: Every<Vec<Option<i32>>, _> = every(not(is_nil()));
        assert_send_sync(&quantified);
        assert_send_sync(&matcher_fn(|v: &i32| *v > 0, "(pos?)", |v: &i32| format!("was {v}")));
    }
}
