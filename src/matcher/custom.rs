//! Ad-hoc matchers assembled from closures.
//!
//! [`matcher_fn`] takes all three parts up front and can never be
//! malformed. [`MatcherBuilder`] lets the parts be supplied one at a time;
//! anything left out is reported by [`Matcher::check_shape`] and makes
//! [`run_match`](crate::engine::run_match) abort before evaluating.

use std::fmt;

use super::Matcher;
use crate::error::{Error, Field, Result};

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;
type Explain<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// Create a matcher from a predicate, a description and a mismatch function.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{matcher_fn, Matcher};
///
/// let even = matcher_fn(
///     |x: &i32| x % 2 == 0,
///     "(even?)",
///     |x: &i32| format!("was {x}, remainder {}", x % 2),
/// );
/// assert!(even.matches(&4));
/// assert_eq!(even.describe(), "(even?)");
/// assert_eq!(even.describe_mismatch(&3), "was 3, remainder 1");
/// ```
pub fn matcher_fn<T, P, D>(
    predicate: P,
    description: impl Into<String>,
    mismatch: D,
) -> FnMatcher<T>
where
    T: ?Sized,
    P: Fn(&T) -> bool + Send + Sync + 'static,
    D: Fn(&T) -> String + Send + Sync + 'static,
{
    MatcherBuilder::new()
        .predicate(predicate)
        .description(description)
        .mismatch(mismatch)
        .build()
}

/// Step-by-step construction of a [`FnMatcher`].
///
/// `build` never fails: a missing part is a bug in the matcher and is
/// reported when the matcher is run.
///
/// ```rust
/// use testkit_match::matcher::{Matcher, MatcherBuilder};
/// use testkit_match::error::{Error, Field};
///
/// let incomplete = MatcherBuilder::new()
///     .predicate(|s: &str| s.is_empty())
///     .description("(blank?)")
///     .build();
///
/// assert_eq!(
///     incomplete.check_shape(),
///     Err(Error::MalformedMatcher { missing: vec![Field::DescribeMismatch] })
/// );
/// ```
pub struct MatcherBuilder<T: ?Sized> {
    predicate: Option<Predicate<T>>,
    description: Option<String>,
    mismatch: Option<Explain<T>>,
}

impl<T: ?Sized> MatcherBuilder<T> {
    /// Start with no parts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            predicate: None,
            description: None,
            mismatch: None,
        }
    }

    /// Set the predicate.
    #[must_use]
    pub fn predicate<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Set the static description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the mismatch explanation.
    #[must_use]
    pub fn mismatch<D>(mut self, mismatch: D) -> Self
    where
        D: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.mismatch = Some(Box::new(mismatch));
        self
    }

    /// Finish the matcher.
    #[must_use]
    pub fn build(self) -> FnMatcher<T> {
        FnMatcher {
            predicate: self.predicate,
            description: self.description,
            mismatch: self.mismatch,
        }
    }
}

impl<T: ?Sized> Default for MatcherBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Matcher backed by closures.
pub struct FnMatcher<T: ?Sized> {
    predicate: Option<Predicate<T>>,
    description: Option<String>,
    mismatch: Option<Explain<T>>,
}

impl<T: ?Sized> FnMatcher<T> {
    fn missing(&self) -> Vec<Field> {
        let present = [
            self.predicate.is_some(),
            self.description.is_some(),
            self.mismatch.is_some(),
        ];
        Field::ALL
            .into_iter()
            .zip(present)
            .filter_map(|(field, present)| (!present).then_some(field))
            .collect()
    }

    fn malformed(&self) -> ! {
        panic!("{}", Error::malformed(self.missing()))
    }
}

impl<T: ?Sized> Matcher<T> for FnMatcher<T> {
    fn matches(&self, value: &T) -> bool {
        match &self.predicate {
            Some(predicate) => predicate(value),
            None => self.malformed(),
        }
    }

    fn describe(&self) -> String {
        match &self.description {
            Some(description) => description.clone(),
            None => self.malformed(),
        }
    }

    fn describe_mismatch(&self, value: &T) -> String {
        match &self.mismatch {
            Some(mismatch) => mismatch(value),
            None => self.malformed(),
        }
    }

    fn check_shape(&self) -> Result<()> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::malformed(missing))
        }
    }
}

impl<T: ?Sized> fmt::Debug for FnMatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMatcher")
            .field("description", &self.description)
            .field("missing", &self.missing())
            .finish_non_exhaustive()
    }
}
