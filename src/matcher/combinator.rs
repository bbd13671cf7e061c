//! Combinators: matchers built from other matchers.
//!
//! A combinator only relies on the [`Matcher`] contract of its children.
//! Descriptions nest (`(all-of (= 1) (<= 2))`); mismatches report the raw
//! value (`was 3`) rather than which child rejected it.

use std::fmt::Debug;
use std::marker::PhantomData;

use super::describe::{describe_child, sexpr, was};
use super::{BoxedMatcher, Matcher};
use crate::collection::Sequence;
use crate::error::Result;

/// Create a matcher that matches when all matchers match.
///
/// An empty list matches everything.
///
/// Matchers of different types must be boxed first, either with
/// [`MatcherExt::boxed`](super::MatcherExt::boxed) or through the
/// [`all_of!`](crate::all_of) macro.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{all_of, equals, less_or_equal, Matcher, MatcherExt};
///
/// let m = all_of(vec![equals(1).boxed(), less_or_equal(2).boxed()]);
/// assert!(m.matches(&1));
/// assert!(!m.matches(&2));
/// assert_eq!(m.describe(), "(all-of (= 1) (<= 2))");
/// ```
pub fn all_of<T: ?Sized>(matchers: Vec<BoxedMatcher<T>>) -> AllOf<T> {
    AllOf {
        description: sexpr("all-of", matchers.iter().map(|m| describe_child::<T, _>(m))),
        matchers,
    }
}

/// Matcher that requires all inner matchers to match.
pub struct AllOf<T: ?Sized> {
    matchers: Vec<BoxedMatcher<T>>,
    description: String,
}

impl<T: Debug + ?Sized> Matcher<T> for AllOf<T> {
    fn matches(&self, value: &T) -> bool {
        self.matchers.iter().all(|m| m.matches(value))
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn describe_mismatch(&self, value: &T) -> String {
        was(value)
    }

    fn check_shape(&self) -> Result<()> {
        self.matchers.iter().try_for_each(|m| m.check_shape())
    }
}

/// Create a matcher that matches when any matcher matches.
///
/// An empty list matches nothing.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{any_of, equals, Matcher, MatcherExt};
///
/// let m = any_of(vec![equals(3).boxed(), equals(2).boxed()]);
/// assert!(m.matches(&2));
/// assert!(!m.matches(&1));
/// assert_eq!(m.describe(), "(any-of (= 3) (= 2))");
/// ```
pub fn any_of<T: ?Sized>(matchers: Vec<BoxedMatcher<T>>) -> AnyOf<T> {
    AnyOf {
        description: sexpr("any-of", matchers.iter().map(|m| describe_child::<T, _>(m))),
        matchers,
    }
}

/// Matcher that requires at least one inner matcher to match.
pub struct AnyOf<T: ?Sized> {
    matchers: Vec<BoxedMatcher<T>>,
    description: String,
}

impl<T: Debug + ?Sized> Matcher<T> for AnyOf<T> {
    fn matches(&self, value: &T) -> bool {
        self.matchers.iter().any(|m| m.matches(value))
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn describe_mismatch(&self, value: &T) -> String {
        was(value)
    }

    fn check_shape(&self) -> Result<()> {
        self.matchers.iter().try_for_each(|m| m.check_shape())
    }
}

/// Create a negating matcher.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{Matcher, not, equals};
///
/// let m = not(equals(2));
/// assert!(m.matches(&1));
/// assert!(!m.matches(&2));
/// assert_eq!(m.describe(), "(not (= 2))");
/// ```
pub fn not<T: ?Sized, M: Matcher<T>>(matcher: M) -> Not<T, M> {
    Not {
        description: sexpr("not", [describe_child::<T, _>(&matcher)]),
        inner: matcher,
        _phantom: PhantomData,
    }
}

/// Matcher that negates another matcher.
pub struct Not<T: ?Sized, M> {
    inner: M,
    description: String,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: Debug + ?Sized, M: Matcher<T>> Matcher<T> for Not<T, M> {
    fn matches(&self, value: &T) -> bool {
        !self.inner.matches(value)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn describe_mismatch(&self, value: &T) -> String {
        was(value)
    }

    fn check_shape(&self) -> Result<()> {
        self.inner.check_shape()
    }
}

/// Create a matcher for sequences where at least one element matches.
///
/// An empty sequence never matches.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{Matcher, some, greater};
///
/// let m = some(greater(2));
/// assert!(m.matches(&vec![1, 3]));
/// assert!(!m.matches(&vec![1, 2]));
/// assert_eq!(m.describe(), "(some (> 2))");
/// ```
pub fn some<S, M>(matcher: M) -> SomeOf<S, M>
where
    S: Sequence + ?Sized,
    M: Matcher<S::Item>,
{
    SomeOf {
        description: sexpr("some", [describe_child::<S::Item, _>(&matcher)]),
        inner: matcher,
        _phantom: PhantomData,
    }
}

/// Matcher that requires some element of a sequence to match.
pub struct SomeOf<S: ?Sized, M> {
    inner: M,
    description: String,
    _phantom: PhantomData<fn(&S)>,
}

impl<S, M> Matcher<S> for SomeOf<S, M>
where
    S: Sequence + Debug + ?Sized,
    M: Matcher<S::Item>,
{
    fn matches(&self, value: &S) -> bool {
        value.is_sequential() && value.elements().any(|element| self.inner.matches(element))
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn describe_mismatch(&self, value: &S) -> String {
        was(value)
    }

    fn check_shape(&self) -> Result<()> {
        self.inner.check_shape()
    }
}

/// Create a matcher for sequences where every element matches.
///
/// An empty sequence always matches.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{Matcher, every, greater};
///
/// let m = every(greater(0));
/// assert!(m.matches(&vec![1, 2]));
/// assert!(m.matches(&Vec::new()));
/// assert!(!m.matches(&vec![1, 0]));
/// assert_eq!(m.describe(), "(every? (> 0))");
/// ```
pub fn every<S, M>(matcher: M) -> Every<S, M>
where
    S: Sequence + ?Sized,
    M: Matcher<S::Item>,
{
    Every {
        description: sexpr("every?", [describe_child::<S::Item, _>(&matcher)]),
        inner: matcher,
        _phantom: PhantomData,
    }
}

/// Matcher that requires every element of a sequence to match.
pub struct Every<S: ?Sized, M> {
    inner: M,
    description: String,
    _phantom: PhantomData<fn(&S)>,
}

impl<S, M> Matcher<S> for Every<S, M>
where
    S: Sequence + Debug + ?Sized,
    M: Matcher<S::Item>,
{
    fn matches(&self, value: &S) -> bool {
        value.is_sequential() && value.elements().all(|element| self.inner.matches(element))
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn describe_mismatch(&self, value: &S) -> String {
        was(value)
    }

    fn check_shape(&self) -> Result<()> {
        self.inner.check_shape()
    }
}
