//! # testkit-match 🧩
//!
//! > Composable, self-describing matchers for test assertions
//!
//! **testkit-match** builds complex expectations out of small ones and
//! keeps the failure text accurate at every level of nesting.
//!
//! ## Quick Start
//!
//! ```rust
//! use testkit_match::prelude::*;
//!
//! let m = any_of![equals(3), equals(2)];
//!
//! let result = run_match(&m, &1);
//! assert!(!result.passed());
//! assert_eq!(
//!     result.message().unwrap(),
//!     "\nExpected: (any-of (= 3) (= 2))\n     but: was 1"
//! );
//! ```
//!
//! ## Features
//!
//! - 🧱 **One contract** - predicate, description, mismatch explanation
//! - 🔗 **Combinators** - `all-of`, `any-of`, `not`, `some`, `every?`
//! - 🏷️ **Type tags** - `instance?`, `isNil`, `isString`, `isKeyword`, ...
//! - 🧾 **Structured results** - pass, or expected/was pairs
//! - 🌐 **Dynamic values** - match decoded documents via [`Value`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assertions;
pub mod collection;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod value;

/// Prelude for convenient imports
///
/// ```rust
/// use testkit_match::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::{Collection, Sequence};
    pub use crate::engine::{format_message, run_match, try_run_match, MatchResult, Mismatch};
    pub use crate::error::{Error, Result};
    pub use crate::matcher::{
        all_of, any_of, anything, contains_str, ends_with, equals, every, greater,
        greater_or_equal, has_count, includes, instance_of, is_char, is_empty, is_keyword, is_map,
        is_nil, is_sequence, is_set, is_string, is_symbol, is_vector, less, less_or_equal,
        matcher_fn, not, satisfies, some, starts_with, BoxedMatcher, Kind, Matcher, MatcherExt,
        Typed,
    };
    pub use crate::value::Value;
    pub use crate::{all_of, any_of, assert_that};
}

// Re-exports
pub use engine::{run_match, MatchResult};
pub use error::{Error, Result};
pub use matcher::Matcher;
pub use value::Value;
