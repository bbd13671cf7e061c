//! Shared text rendering for descriptions and mismatches.
//!
//! Every built-in matcher routes its description through [`sexpr`] so the
//! whole tree reads as one S-expression, e.g. `(all-of (= 1) (<= 2))`.
//! Literal arguments are rendered with [`repr`], which is the value's
//! [`Debug`] form.

use std::fmt::{Debug, Write};

use super::kind::Typed;
use super::Matcher;

/// Stands in for a nested matcher that cannot describe itself.
pub const MALFORMED: &str = "<malformed>";

/// Render `(name part1 part2 ...)`.
///
/// Parts must already be strings: nested matcher descriptions or
/// [`repr`]-rendered literals.
///
/// ```rust
/// use testkit_match::matcher::describe::sexpr;
///
/// assert_eq!(sexpr("any-of", ["(= 3)", "(= 2)"]), "(any-of (= 3) (= 2))");
/// assert_eq!(sexpr("empty?", Vec::<String>::new()), "(empty?)");
/// ```
pub fn sexpr<I, S>(name: &str, parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::with_capacity(name.len() + 2);
    out.push('(');
    out.push_str(name);
    for part in parts {
        out.push(' ');
        out.push_str(part.as_ref());
    }
    out.push(')');
    out
}

/// Description of a nested matcher, checked against its shape first.
///
/// Combinators build their description eagerly, so a malformed child must
/// not be asked to describe itself. The placeholder keeps construction
/// infallible and leaves the failure to the shape guard at run time.
pub(crate) fn describe_child<T, M>(matcher: &M) -> String
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    match matcher.check_shape() {
        Ok(()) => matcher.describe(),
        Err(_) => MALFORMED.to_string(),
    }
}

/// Canonical debug representation of a value.
pub fn repr<T: Debug + ?Sized>(value: &T) -> String {
    format!("{value:?}")
}

/// The generic mismatch text: `was <repr>`.
pub fn was<T: Debug + ?Sized>(value: &T) -> String {
    format!("was {value:?}")
}

/// Mismatch text for type predicates: `was <repr> <type>`.
pub fn was_typed<T: Debug + Typed + ?Sized>(value: &T) -> String {
    let mut out = was(value);
    // Writing to a String cannot fail.
    let _ = write!(out, " <{}>", value.type_name());
    out
}
