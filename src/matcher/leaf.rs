//! Leaf matchers built directly from plain arguments.

use std::fmt::Debug;
use std::marker::PhantomData;

use super::describe::{repr, sexpr, was};
use super::Matcher;
use crate::collection::{Collection, Sequence};

/// Create an equality matcher.
///
/// Equality is structural ([`PartialEq`]), not identity.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{Matcher, equals};
///
/// let m = equals(42);
/// assert!(m.matches(&42));
/// assert!(!m.matches(&0));
/// assert_eq!(m.describe(), "(= 42)");
/// assert_eq!(m.describe_mismatch(&0), "was 0");
/// ```
pub fn equals<T: PartialEq + Debug>(expected: T) -> Equals<T> {
    Equals {
        description: sexpr("=", [repr(&expected)]),
        expected,
    }
}

/// Matcher for equality.
#[derive(Debug, Clone)]
pub struct Equals<T> {
    expected: T,
    description: String,
}

impl<T: PartialEq + Debug> Matcher<T> for Equals<T> {
    fn matches(&self, value: &T) -> bool {
        value == &self.expected
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn describe_mismatch(&self, value: &T) -> String {
        was(value)
    }
}

/// Which side of the bound a [`Compare`] matcher accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `value < bound`
    Less,
    /// `value <= bound`
    LessOrEqual,
    /// `value > bound`
    Greater,
    /// `value >= bound`
    GreaterOrEqual,
}

impl Comparison {
    /// Operator symbol used in descriptions.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Less => "<",
            Comparison::LessOrEqual => "<=",
            Comparison::Greater => ">",
            Comparison::GreaterOrEqual => ">=",
        }
    }

    fn holds<T: PartialOrd + ?Sized>(self, value: &T, bound: &T) -> bool {
        match self {
            Comparison::Less => value < bound,
            Comparison::LessOrEqual => value <= bound,
            Comparison::Greater => value > bound,
            Comparison::GreaterOrEqual => value >= bound,
        }
    }
}

fn compare<T: PartialOrd + Debug>(comparison: Comparison, bound: T) -> Compare<T> {
    Compare {
        description: sexpr(comparison.symbol(), [repr(&bound)]),
        comparison,
        bound,
    }
}

/// Create a less-than-or-equal matcher.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{Matcher, less_or_equal};
///
/// let m = less_or_equal(10);
/// assert!(m.matches(&10));
/// assert!(m.matches(&5));
/// assert!(!m.matches(&20));
/// ```
pub fn less_or_equal<T: PartialOrd + Debug>(bound: T) -> Compare<T> {
    compare(Comparison::LessOrEqual, bound)
}

/// Create a less-than matcher.
pub fn less<T: PartialOrd + Debug>(bound: T) -> Compare<T> {
    compare(Comparison::Less, bound)
}

/// Create a greater-than matcher.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{Matcher, greater};
///
/// let m = greater(10);
/// assert!(m.matches(&20));
/// assert!(!m.matches(&10));
/// assert_eq!(m.describe(), "(> 10)");
/// ```
pub fn greater<T: PartialOrd + Debug>(bound: T) -> Compare<T> {
    compare(Comparison::Greater, bound)
}

/// Create a greater-than-or-equal matcher.
pub fn greater_or_equal<T: PartialOrd + Debug>(bound: T) -> Compare<T> {
    compare(Comparison::GreaterOrEqual, bound)
}

/// Matcher for ordering comparisons.
#[derive(Debug, Clone)]
pub struct Compare<T> {
    comparison: Comparison,
    bound: T,
    description: String,
}

impl<T: PartialOrd + Debug> Matcher<T> for Compare<T> {
    fn matches(&self, value: &T) -> bool {
        self.comparison.holds(value, &self.bound)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn describe_mismatch(&self, value: &T) -> String {
        was(value)
    }
}

/// Create an is-empty matcher for collections.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{Matcher, is_empty};
///
/// let m = is_empty();
/// assert!(m.matches(&Vec::<i32>::new()));
/// assert!(!m.matches(&vec![1]));
/// assert!(m.matches(""));
/// ```
pub fn is_empty() -> IsEmpty {
    IsEmpty {
        description: sexpr("empty?", Vec::<&str>::new()),
    }
}

/// Matcher for empty collections.
#[derive(Debug, Clone)]
pub struct IsEmpty {
    description: String,
}

impl<C: Collection + Debug + ?Sized> Matcher<C> for IsEmpty {
    fn matches(&self, value: &C) -> bool {
        value.size() == Some(0)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn describe_mismatch(&self, value: &C) -> String {
        was(value)
    }
}

/// Create an element-count matcher for collections.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{Matcher, has_count};
///
/// let m = has_count(3);
/// assert!(m.matches(&vec![1, 2, 3]));
/// assert!(!m.matches(&vec![1, 2]));
/// ```
pub fn has_count(count: usize) -> HasCount {
    HasCount {
        count,
        description: sexpr("has-count", [count.to_string()]),
    }
}

/// Matcher for collection size.
#[derive(Debug, Clone)]
pub struct HasCount {
    count: usize,
    description: String,
}

impl<C: Collection + Debug + ?Sized> Matcher<C> for HasCount {
    fn matches(&self, value: &C) -> bool {
        value.size() == Some(self.count)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn describe_mismatch(&self, value: &C) -> String {
        was(value)
    }
}

/// Create a contains-element matcher for sequences.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{Matcher, includes};
///
/// let m = includes(2);
/// assert!(m.matches(&vec![1, 2, 3]));
/// assert!(!m.matches(&vec![1, 3]));
/// ```
pub fn includes<T: PartialEq + Debug>(element: T) -> Includes<T> {
    Includes {
        description: sexpr("includes", [repr(&element)]),
        element,
    }
}

/// Matcher for sequence membership.
#[derive(Debug, Clone)]
pub struct Includes<T> {
    element: T,
    description: String,
}

impl<S, T> Matcher<S> for Includes<T>
where
    S: Sequence<Item = T> + Debug + ?Sized,
    T: PartialEq + Debug,
{
    fn matches(&self, value: &S) -> bool {
        value.is_sequential() && value.elements().any(|element| element == &self.element)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn describe_mismatch(&self, value: &S) -> String {
        was(value)
    }
}

/// Create a matcher that always matches.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{Matcher, anything};
///
/// let m = anything();
/// assert!(m.matches(&42));
/// assert!(m.matches("text"));
/// ```
pub fn anything() -> Anything {
    Anything
}

/// Matcher that matches anything.
#[derive(Debug, Clone, Copy)]
pub struct Anything;

impl<T: Debug + ?Sized> Matcher<T> for Anything {
    fn matches(&self, _value: &T) -> bool {
        true
    }

    fn describe(&self) -> String {
        sexpr("anything", Vec::<&str>::new())
    }

    fn describe_mismatch(&self, value: &T) -> String {
        was(value)
    }
}

/// Create a predicate-based matcher.
///
/// `name` is shown verbatim in the description.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{Matcher, satisfies};
///
/// let m = satisfies(|x: &i32| *x % 2 == 0, "even?");
/// assert!(m.matches(&4));
/// assert!(!m.matches(&3));
/// assert_eq!(m.describe(), "(satisfies even?)");
/// ```
pub fn satisfies<T, F>(predicate: F, name: &str) -> Satisfies<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    Satisfies {
        predicate,
        description: sexpr("satisfies", [name]),
        _phantom: PhantomData,
    }
}

/// Matcher based on a predicate function.
pub struct Satisfies<T: ?Sized, F> {
    predicate: F,
    description: String,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: Debug + ?Sized, F: Fn(&T) -> bool> Matcher<T> for Satisfies<T, F> {
    fn matches(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn describe_mismatch(&self, value: &T) -> String {
        was(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StrOp {
    Contains,
    StartsWith,
    EndsWith,
}

fn str_matcher(op: StrOp, needle: &str) -> StrMatcher {
    let name = match op {
        StrOp::Contains => "contains-str",
        StrOp::StartsWith => "starts-with",
        StrOp::EndsWith => "ends-with",
    };
    StrMatcher {
        op,
        needle: needle.to_string(),
        description: sexpr(name, [repr(needle)]),
    }
}

/// Create a substring matcher for strings.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{Matcher, contains_str};
///
/// let m = contains_str("world");
/// assert!(m.matches("hello world"));
/// assert!(!m.matches(&"hello".to_string()));
/// ```
pub fn contains_str(substring: &str) -> StrMatcher {
    str_matcher(StrOp::Contains, substring)
}

/// Create a prefix matcher for strings.
pub fn starts_with(prefix: &str) -> StrMatcher {
    str_matcher(StrOp::StartsWith, prefix)
}

/// Create a suffix matcher for strings.
pub fn ends_with(suffix: &str) -> StrMatcher {
    str_matcher(StrOp::EndsWith, suffix)
}

/// Matcher for substring, prefix and suffix checks.
#[derive(Debug, Clone)]
pub struct StrMatcher {
    op: StrOp,
    needle: String,
    description: String,
}

impl<S: AsRef<str> + Debug + ?Sized> Matcher<S> for StrMatcher {
    fn matches(&self, value: &S) -> bool {
        let value = value.as_ref();
        match self.op {
            StrOp::Contains => value.contains(&self.needle),
            StrOp::StartsWith => value.starts_with(&self.needle),
            StrOp::EndsWith => value.ends_with(&self.needle),
        }
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn describe_mismatch(&self, value: &S) -> String {
        was(value)
    }
}
