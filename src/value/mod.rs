//! Dynamic values.
//!
//! [`Value`] is the value type to use when the thing under test is not a
//! single Rust type: decoded documents, interpreter output, mixed
//! collections. It carries its own [`Kind`] so the type-tag matchers work
//! on it, and its [`Debug`] output is the canonical repr used in
//! descriptions:
//!
//! ```rust
//! use testkit_match::Value;
//!
//! let v = Value::map([(Value::keyword("ids"), Value::vector([1, 2]))]);
//! assert_eq!(format!("{v:?}"), "{:ids [1 2]}");
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Write};

use crate::collection::{Collection, Sequence};
use crate::matcher::{Kind, Typed};

#[cfg(feature = "json")]
mod json;

/// A dynamically typed value.
#[derive(Clone)]
pub enum Value {
    /// Absence of a value.
    Nil,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Float.
    Float(f64),
    /// Character.
    Char(char),
    /// String.
    Str(String),
    /// Keyword, written `:name`.
    Keyword(String),
    /// Symbol, written `name`.
    Symbol(String),
    /// List, written `(a b)`.
    List(Vec<Value>),
    /// Vector, written `[a b]`.
    Vector(Vec<Value>),
    /// Set of distinct values, written `#{a b}`.
    Set(Vec<Value>),
    /// Map with distinct keys, written `{k v}`.
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Create a keyword.
    pub fn keyword(name: impl Into<String>) -> Self {
        Self::Keyword(name.into())
    }

    /// Create a symbol.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Create a list.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Create a vector.
    pub fn vector<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::Vector(items.into_iter().map(Into::into).collect())
    }

    /// Create a set; repeated elements are kept once.
    pub fn set<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut distinct: Vec<Value> = Vec::new();
        for item in items {
            let item = item.into();
            if !distinct.contains(&item) {
                distinct.push(item);
            }
        }
        Self::Set(distinct)
    }

    /// Create a map; a repeated key keeps its last value.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let mut distinct: Vec<(Value, Value)> = Vec::new();
        for (key, value) in entries {
            let (key, value) = (key.into(), value.into());
            match distinct.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => distinct.push((key, value)),
            }
        }
        Self::Map(distinct)
    }

    /// Look up a key in a map. `None` for missing keys and non-maps.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Whether this is [`Value::Nil`].
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

/// Exact ordering of an integer against a float, without rounding the
/// integer through `f64`.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    // 2^63, exactly representable.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return None;
    }
    if f >= LIMIT {
        return Some(Ordering::Less);
    }
    if f < -LIMIT {
        return Some(Ordering::Greater);
    }
    let whole = f.trunc();
    #[allow(clippy::cast_possible_truncation)]
    let ordering = i.cmp(&(whole as i64)).then_with(|| {
        // `whole` and `f` differ only by the fraction.
        if f > whole {
            Ordering::Less
        } else if f < whole {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    Some(ordering)
}

fn same_elements(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().all(|x| b.contains(x)) && b.iter().all(|x| a.contains(x))
}

fn same_entries(a: &[(Value, Value)], b: &[(Value, Value)]) -> bool {
    a.len() == b.len() && a.iter().all(|(k, v)| b.iter().any(|(k2, v2)| k == k2 && v == v2))
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::{Bool, Char, Float, Int, Keyword, List, Map, Nil, Set, Str, Symbol, Vector};
        match (self, other) {
            (Nil, Nil) => true,
            (Bool(a), Bool(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Float(a), Float(b)) => a == b,
            (Int(a), Float(b)) | (Float(b), Int(a)) => {
                cmp_int_float(*a, *b) == Some(Ordering::Equal)
            }
            (Char(a), Char(b)) => a == b,
            (Str(a), Str(b)) | (Keyword(a), Keyword(b)) | (Symbol(a), Symbol(b)) => a == b,
            (List(a) | Vector(a), List(b) | Vector(b)) => a == b,
            (Set(a), Set(b)) => same_elements(a, b),
            (Map(a), Map(b)) => same_entries(a, b),
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use Value::{Bool, Char, Float, Int, Keyword, Str, Symbol};
        match (self, other) {
            (Bool(a), Bool(b)) => a.partial_cmp(b),
            (Int(a), Int(b)) => a.partial_cmp(b),
            (Float(a), Float(b)) => a.partial_cmp(b),
            (Int(a), Float(b)) => cmp_int_float(*a, *b),
            (Float(a), Int(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
            (Char(a), Char(b)) => a.partial_cmp(b),
            (Str(a), Str(b)) | (Keyword(a), Keyword(b)) | (Symbol(a), Symbol(b)) => {
                a.partial_cmp(b)
            }
            _ => (self == other).then_some(Ordering::Equal),
        }
    }
}

fn write_seq<'a>(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    items: impl Iterator<Item = &'a Value>,
    close: &str,
) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{item:?}")?;
    }
    f.write_str(close)
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Char(c) => match c {
                '\n' => f.write_str("\\newline"),
                ' ' => f.write_str("\\space"),
                '\t' => f.write_str("\\tab"),
                c => write!(f, "\\{c}"),
            },
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Keyword(k) => write!(f, ":{k}"),
            Value::Symbol(s) => f.write_str(s),
            Value::List(items) => write_seq(f, "(", items.iter(), ")"),
            Value::Vector(items) => write_seq(f, "[", items.iter(), "]"),
            Value::Set(items) => write_seq(f, "#{", items.iter(), "}"),
            Value::Map(entries) => {
                f.write_char('{')?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k:?} {v:?}")?;
                }
                f.write_char('}')
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Typed for Value {
    fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Bool(_) => Kind::Boolean,
            Value::Int(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::Char(_) => Kind::Char,
            Value::Str(_) => Kind::String,
            Value::Keyword(_) => Kind::Keyword,
            Value::Symbol(_) => Kind::Symbol,
            Value::List(_) => Kind::List,
            Value::Vector(_) => Kind::Vector,
            Value::Set(_) => Kind::Set,
            Value::Map(_) => Kind::Map,
        }
    }
}

impl Collection for Value {
    fn size(&self) -> Option<usize> {
        match self {
            Value::Nil => Some(0),
            Value::Str(s) => s.size(),
            Value::List(items) | Value::Vector(items) | Value::Set(items) => Some(items.len()),
            Value::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }
}

impl Sequence for Value {
    type Item = Value;

    fn elements<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Value> + 'a> {
        let items: &[Value] = match self {
            Value::List(items) | Value::Vector(items) | Value::Set(items) => items,
            _ => &[],
        };
        Box::new(items.iter())
    }

    fn is_sequential(&self) -> bool {
        // Nil walks as the empty sequence.
        self.is_nil() || self.kind().is_walkable()
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Nil
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    Value::Int(i64::from(i))
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::vector(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repr() {
        assert_eq!(format!("{:?}", Value::Nil), "nil");
        assert_eq!(format!("{:?}", Value::from(1.0)), "1.0");
        assert_eq!(format!("{:?}", Value::from('a')), "\\a");
        assert_eq!(format!("{:?}", Value::from(' ')), "\\space");
        assert_eq!(format!("{:?}", Value::from("s")), "\"s\"");
        assert_eq!(format!("{:?}", Value::keyword("k")), ":k");
        assert_eq!(format!("{:?}", Value::symbol("inc")), "inc");
        assert_eq!(format!("{:?}", Value::list([1, 2])), "(1 2)");
        assert_eq!(format!("{:?}", Value::set([1, 1, 2])), "#{1 2}");
        assert_eq!(
            format!("{}", Value::map([("a", 1), ("b", 2)])),
            "{\"a\" 1, \"b\" 2}"
        );
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Value::list([1, 2]), Value::vector([1, 2]));
        assert_eq!(Value::set([1, 2]), Value::set([2, 1]));
        assert_eq!(
            Value::map([("a", 1), ("b", 2)]),
            Value::map([("b", 2), ("a", 1)])
        );
        assert_ne!(Value::keyword("a"), Value::symbol("a"));
        assert_ne!(Value::from("a"), Value::keyword("a"));
        assert_eq!(Value::from(1), Value::from(1.0));
    }

    #[test]
    fn test_integer_float_equality_is_exact() {
        let big = 1_i64 << 53;
        assert_eq!(Value::from(big), Value::from(9_007_199_254_740_992.0));
        assert_ne!(Value::from(big + 1), Value::from(9_007_199_254_740_992.0));
        assert!(Value::from(big + 1) > Value::from(9_007_199_254_740_992.0));
        assert!(Value::from(i64::MAX) < Value::from(9_223_372_036_854_775_808.0));
        assert!(Value::from(i64::MIN) > Value::from(f64::NEG_INFINITY));
        assert!(Value::from(-2) < Value::from(-1.5));
        assert_eq!(Value::from(1).partial_cmp(&Value::from(f64::NAN)), None);
    }

    #[test]
    fn test_sets_with_duplicates_compare_both_ways() {
        let a = Value::Set(vec![Value::from(1), Value::from(1), Value::from(2)]);
        let b = Value::Set(vec![Value::from(1), Value::from(2), Value::from(2)]);
        assert_ne!(a, b);
        assert_ne!(b, a);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_ordering() {
        assert!(Value::from(1) < Value::from(1.5));
        assert!(Value::from("a") < Value::from("b"));
        assert_eq!(Value::from(1).partial_cmp(&Value::from("a")), None);
        assert_eq!(Value::Nil.partial_cmp(&Value::Nil), Some(Ordering::Equal));
        assert_eq!(Value::list([1]).partial_cmp(&Value::list([2])), None);
    }

    #[test]
    fn test_map_keeps_last_value_for_repeated_key() {
        let m = Value::map([("a", 1), ("a", 2)]);
        assert_eq!(m.get(&Value::from("a")), Some(&Value::from(2)));
        assert_eq!(m.size(), Some(1));
    }

    #[test]
    fn test_kinds_and_walkability() {
        assert_eq!(Value::Nil.kind(), Kind::Nil);
        assert_eq!(Value::from(vec![1]).kind(), Kind::Vector);
        assert_eq!(Value::from(None::<i32>).kind(), Kind::Nil);
        assert!(Value::set([1]).is_sequential());
        assert!(!Value::map([(1, 2)]).is_sequential());
        assert!(!Value::from("abc").is_sequential());
        assert!(Value::Nil.is_sequential());
        assert_eq!(Value::Nil.elements().count(), 0);
        assert_eq!(Value::from("abc").size(), Some(3));
        assert_eq!(Value::from(3).size(), None);
    }
}
