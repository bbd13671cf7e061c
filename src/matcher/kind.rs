//! Type-membership matchers.
//!
//! How a value reports its type is a capability, [`Typed`], not something
//! the combinators know about. [`Value`](crate::Value) answers by
//! discriminant; Rust types answer statically.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt::{self, Debug};

use super::describe::{sexpr, was_typed};
use super::Matcher;

/// The shape categories a value can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Absence of a value.
    Nil,
    /// `true` / `false`.
    Boolean,
    /// Any integer width.
    Integer,
    /// Any float width.
    Float,
    /// A single character.
    Char,
    /// Text.
    String,
    /// Interned name, written `:name`.
    Keyword,
    /// Bare name, written `name`.
    Symbol,
    /// Linked, `(a b)`.
    List,
    /// Indexed, `[a b]`.
    Vector,
    /// Unordered distinct, `#{a b}`.
    Set,
    /// Key/value, `{k v}`.
    Map,
}

impl Kind {
    /// Lowercase name used in descriptions and mismatches.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Kind::Nil => "nil",
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Char => "char",
            Kind::String => "string",
            Kind::Keyword => "keyword",
            Kind::Symbol => "symbol",
            Kind::List => "list",
            Kind::Vector => "vector",
            Kind::Set => "set",
            Kind::Map => "map",
        }
    }

    /// Lists and vectors.
    #[must_use]
    pub fn is_sequential(self) -> bool {
        matches!(self, Kind::List | Kind::Vector)
    }

    /// Lists, vectors and sets: the kinds whose elements can be walked.
    #[must_use]
    pub fn is_walkable(self) -> bool {
        matches!(self, Kind::List | Kind::Vector | Kind::Set)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reports which [`Kind`] a value belongs to.
pub trait Typed {
    /// The value's category.
    fn kind(&self) -> Kind;

    /// Name shown in `was <repr> <type>` mismatches.
    fn type_name(&self) -> &'static str {
        self.kind().name()
    }
}

macro_rules! typed_as {
    ($kind:expr => $($ty:ty),* $(,)?) => {
        $(
            impl Typed for $ty {
                fn kind(&self) -> Kind {
                    $kind
                }
            }
        )*
    };
}

typed_as!(Kind::Boolean => bool);
typed_as!(Kind::Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
typed_as!(Kind::Float => f32, f64);
typed_as!(Kind::Char => char);
typed_as!(Kind::String => str, String);
typed_as!(Kind::Nil => ());

impl<T> Typed for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Vector
    }
}

impl<T> Typed for [T] {
    fn kind(&self) -> Kind {
        Kind::Vector
    }
}

impl<T, const N: usize> Typed for [T; N] {
    fn kind(&self) -> Kind {
        Kind::Vector
    }
}

impl<T> Typed for VecDeque<T> {
    fn kind(&self) -> Kind {
        Kind::Vector
    }
}

impl<T> Typed for LinkedList<T> {
    fn kind(&self) -> Kind {
        Kind::List
    }
}

impl<T, S> Typed for HashSet<T, S> {
    fn kind(&self) -> Kind {
        Kind::Set
    }
}

impl<T> Typed for BTreeSet<T> {
    fn kind(&self) -> Kind {
        Kind::Set
    }
}

impl<K, V, S> Typed for HashMap<K, V, S> {
    fn kind(&self) -> Kind {
        Kind::Map
    }
}

impl<K, V> Typed for BTreeMap<K, V> {
    fn kind(&self) -> Kind {
        Kind::Map
    }
}

impl<T: Typed> Typed for Option<T> {
    fn kind(&self) -> Kind {
        self.as_ref().map_or(Kind::Nil, Typed::kind)
    }
}

impl<T: Typed + ?Sized> Typed for &T {
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

/// Create a matcher for values of the given kind.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{instance_of, Kind, Matcher};
///
/// let m = instance_of(Kind::String);
/// assert!(m.matches("text"));
/// assert!(!m.matches(&1));
/// assert_eq!(Matcher::<i32>::describe_mismatch(&m, &1), "was 1 <integer>");
/// ```
pub fn instance_of(kind: Kind) -> KindMatcher {
    KindMatcher {
        kinds: vec![kind],
        description: sexpr("instance?", [kind.name()]),
    }
}

fn tag(name: &str, kinds: &[Kind]) -> KindMatcher {
    KindMatcher {
        kinds: kinds.to_vec(),
        description: sexpr(name, Vec::<&str>::new()),
    }
}

/// Matches absent values: `None`, `()` and `Value::Nil`.
pub fn is_nil() -> KindMatcher {
    tag("isNil", &[Kind::Nil])
}

/// Matches text.
pub fn is_string() -> KindMatcher {
    tag("isString", &[Kind::String])
}

/// Matches key/value collections.
pub fn is_map() -> KindMatcher {
    tag("isMap", &[Kind::Map])
}

/// Matches ordered sequences: lists and vectors.
pub fn is_sequence() -> KindMatcher {
    tag("isSequence", &[Kind::List, Kind::Vector])
}

/// Matches single characters.
pub fn is_char() -> KindMatcher {
    tag("isChar", &[Kind::Char])
}

/// Matches vectors only.
pub fn is_vector() -> KindMatcher {
    tag("isVector", &[Kind::Vector])
}

/// Matches keywords.
pub fn is_keyword() -> KindMatcher {
    tag("isKeyword", &[Kind::Keyword])
}

/// Matches symbols.
pub fn is_symbol() -> KindMatcher {
    tag("isSymbol", &[Kind::Symbol])
}

/// Matches sets.
pub fn is_set() -> KindMatcher {
    tag("isSet", &[Kind::Set])
}

/// Matcher for type membership.
#[derive(Debug, Clone)]
pub struct KindMatcher {
    kinds: Vec<Kind>,
    description: String,
}

impl<T: Typed + Debug + ?Sized> Matcher<T> for KindMatcher {
    fn matches(&self, value: &T) -> bool {
        self.kinds.contains(&value.kind())
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn describe_mismatch(&self, value: &T) -> String {
        was_typed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<T: Typed + Debug + ?Sized>(m: &KindMatcher, value: &T) -> bool {
        m.matches(value)
    }

    #[test]
    fn test_instance_of() {
        let m = instance_of(Kind::Integer);
        assert!(check(&m, &42_u8));
        assert!(!check(&m, &4.2));
        assert_eq!(Matcher::<f64>::describe(&m), "(instance? integer)");
        assert_eq!(Matcher::<f64>::describe_mismatch(&m, &4.2), "was 4.2 <float>");
    }

    #[test]
    fn test_is_nil() {
        assert!(check(&is_nil(), &None::<i32>));
        assert!(check(&is_nil(), &()));
        assert!(!check(&is_nil(), &Some(1)));
        assert_eq!(
            Matcher::<Option<i32>>::describe_mismatch(&is_nil(), &Some(1)),
            "was Some(1) <integer>"
        );
    }

    #[test]
    fn test_type_tags() {
        assert!(check(&is_string(), "s"));
        assert!(check(&is_string(), &String::from("s")));
        assert!(check(&is_char(), &'x'));
        assert!(check(&is_vector(), &vec![1]));
        assert!(check(&is_sequence(), &vec![1]));
        assert!(check(&is_sequence(), &LinkedList::<i32>::new()));
        assert!(!check(&is_vector(), &LinkedList::<i32>::new()));
        assert!(check(&is_map(), &BTreeMap::<i32, i32>::new()));
        assert!(check(&is_set(), &HashSet::<i32>::new()));
        assert!(!check(&is_keyword(), "kw"));
        assert!(!check(&is_symbol(), "sym"));
    }

    #[test]
    fn test_tag_descriptions() {
        assert_eq!(Matcher::<str>::describe(&is_string()), "(isString)");
        assert_eq!(Matcher::<str>::describe(&is_nil()), "(isNil)");
        assert_eq!(Matcher::<str>::describe(&is_sequence()), "(isSequence)");
        assert_eq!(
            Matcher::<str>::describe_mismatch(&is_map(), "abc"),
            "was \"abc\" <string>"
        );
    }
}
