//! Error definitions
//!
//! This module provides error types for testkit-match.
//!
//! A value failing a matcher is *not* an error: it is a
//! [`MatchResult::Fail`](crate::engine::MatchResult::Fail). The errors here
//! describe bugs in how a matcher was put together.

use std::fmt;

use thiserror::Error;

/// One of the three parts every matcher must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// The predicate.
    Match,
    /// The static expectation text.
    Description,
    /// The failure explanation function.
    DescribeMismatch,
}

impl Field {
    /// All fields, in contract order.
    pub const ALL: [Field; 3] = [Field::Match, Field::Description, Field::DescribeMismatch];

    /// Name used in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Field::Match => "match",
            Field::Description => "description",
            Field::DescribeMismatch => "describe-mismatch",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Main error type for testkit-match
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A matcher is missing part of its contract.
    #[error("Malformed matcher: missing {}", join_fields(.missing))]
    MalformedMatcher {
        /// Every field that was not supplied.
        missing: Vec<Field>,
    },

    /// Assertion failed
    #[error("Assertion failed: {0}")]
    AssertionFailed(String),
}

impl Error {
    /// Create a malformed matcher error.
    #[must_use]
    pub fn malformed(missing: impl IntoIterator<Item = Field>) -> Self {
        let mut missing: Vec<Field> = missing.into_iter().collect();
        missing.sort_unstable();
        missing.dedup();
        Self::MalformedMatcher { missing }
    }

    /// Create an assertion failed error.
    #[must_use]
    pub fn assertion_failed(message: impl Into<String>) -> Self {
        Self::AssertionFailed(message.into())
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| format!("`{field}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
