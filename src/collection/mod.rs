//! Collection capabilities used by the count, membership and quantifier
//! matchers.
//!
//! [`Collection`] answers "how many elements?"; [`Sequence`] walks them.
//! Both are implemented for the standard collections and for
//! [`Value`](crate::Value), so the same matcher tree works on typed Rust
//! data and on dynamic documents.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

/// A value whose element count can be asked for.
pub trait Collection {
    /// Number of elements, or `None` if the value is not a collection.
    fn size(&self) -> Option<usize>;
}

/// A value whose elements can be walked in order.
pub trait Sequence {
    /// Element type.
    type Item;

    /// Iterate the elements.
    fn elements<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Self::Item> + 'a>;

    /// Whether this value can be walked at all.
    ///
    /// Quantifiers and membership never match a value that returns `false`.
    fn is_sequential(&self) -> bool {
        true
    }
}

macro_rules! sized_by_len {
    ($($ty:ty => [$($param:tt)*]),* $(,)?) => {
        $(
            impl<$($param)*> Collection for $ty {
                fn size(&self) -> Option<usize> {
                    Some(self.len())
                }
            }
        )*
    };
}

sized_by_len! {
    Vec<T> => [T],
    [T] => [T],
    VecDeque<T> => [T],
    LinkedList<T> => [T],
    HashSet<T, S> => [T, S],
    BTreeSet<T> => [T],
    HashMap<K, V, S> => [K, V, S],
    BTreeMap<K, V> => [K, V],
}

impl<T, const N: usize> Collection for [T; N] {
    fn size(&self) -> Option<usize> {
        Some(N)
    }
}

impl Collection for str {
    fn size(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

impl Collection for String {
    fn size(&self) -> Option<usize> {
        self.as_str().size()
    }
}

impl<T> Collection for Option<T> {
    fn size(&self) -> Option<usize> {
        Some(usize::from(self.is_some()))
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    fn size(&self) -> Option<usize> {
        (**self).size()
    }
}

macro_rules! walked_by_iter {
    ($($ty:ty => [$($param:tt)*]),* $(,)?) => {
        $(
            impl<$($param)*> Sequence for $ty {
                type Item = T;

                fn elements<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a> {
                    Box::new(self.iter())
                }
            }
        )*
    };
}

walked_by_iter! {
    Vec<T> => [T],
    [T] => [T],
    VecDeque<T> => [T],
    LinkedList<T> => [T],
    HashSet<T, S> => [T, S],
    BTreeSet<T> => [T],
    Option<T> => [T],
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn elements<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        Box::new(self.iter())
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    fn elements<'a>(&'a self) -> Box<dyn Iterator<Item = &'a S::Item> + 'a> {
        (**self).elements()
    }

    fn is_sequential(&self) -> bool {
        (**self).is_sequential()
    }
}
