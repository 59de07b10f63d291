//! Lookups over sequences and maps that answer with [`Maybe`] instead of
//! panicking or returning [`Option`].
use crate::maybe::Maybe;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeMap, HashMap};

pub trait IteratorExt: Iterator + Sized {
    fn first_or_none(mut self) -> Maybe<Self::Item> {
        self.next().into()
    }

    fn first_or_none_where<P>(mut self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate).into()
    }

    fn last_or_none(self) -> Maybe<Self::Item> {
        self.last().into()
    }

    /// Present only when the iterator yields exactly one item.
    fn single_or_none(mut self) -> Maybe<Self::Item> {
        match (self.next(), self.next()) {
            (Some(item), None) => Maybe::Some(item),
            _ => Maybe::None,
        }
    }

    fn element_at_or_none(mut self, index: usize) -> Maybe<Self::Item> {
        self.nth(index).into()
    }
}

impl<I: Iterator> IteratorExt for I {}

pub trait SliceExt<T> {
    fn first_or_none(&self) -> Maybe<&T>;
    fn last_or_none(&self) -> Maybe<&T>;
    fn element_at_or_none(&self, index: usize) -> Maybe<&T>;
}

impl<T> SliceExt<T> for [T] {
    fn first_or_none(&self) -> Maybe<&T> {
        self.first().into()
    }

    fn last_or_none(&self) -> Maybe<&T> {
        self.last().into()
    }

    fn element_at_or_none(&self, index: usize) -> Maybe<&T> {
        self.get(index).into()
    }
}

pub trait MapExt<K, V> {
    fn get_or_none<Q>(&self, key: &Q) -> Maybe<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized;
}

impl<K, V, S> MapExt<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn get_or_none<Q>(&self, key: &Q) -> Maybe<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        self.get(key).into()
    }
}

impl<K: Ord, V> MapExt<K, V> for BTreeMap<K, V> {
    fn get_or_none<Q>(&self, key: &Q) -> Maybe<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        self.get(key).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterator_lookups() {
        assert_eq!([1, 2, 3].into_iter().first_or_none(), Maybe::some(1));
        assert_eq!(core::iter::empty::<i32>().first_or_none(), Maybe::none());
        assert_eq!([1, 2, 3].into_iter().last_or_none(), Maybe::some(3));
        assert_eq!([1, 2, 3].into_iter().first_or_none_where(|x| *x > 1), Maybe::some(2));
        assert_eq!([7].into_iter().single_or_none(), Maybe::some(7));
        assert_eq!([7, 8].into_iter().single_or_none(), Maybe::none());
        assert_eq!(core::iter::empty::<i32>().single_or_none(), Maybe::none());
        assert_eq!((0..10).element_at_or_none(4), Maybe::some(4));
        assert_eq!((0..10).element_at_or_none(10), Maybe::none());
    }

    #[test]
    fn slice_lookups() {
        let values = [10, 20, 30];
        assert_eq!(values.first_or_none(), Maybe::some(&10));
        assert_eq!(values.last_or_none(), Maybe::some(&30));
        assert_eq!(values.element_at_or_none(1), Maybe::some(&20));
        assert_eq!(values[..0].first_or_none(), Maybe::none());
    }

    #[test]
    fn map_lookup_falls_back() {
        let hash: HashMap<&str, &str> = [("a", "apple"), ("b", "banana")].into_iter().collect();
        assert_eq!(hash.get_or_none("z").copied().value_or("default"), "default");
        assert_eq!(hash.get_or_none("a").copied().value_or("default"), "apple");

        let tree: BTreeMap<String, i32> = [("one".to_owned(), 1)].into_iter().collect();
        assert_eq!(tree.get_or_none("one"), Maybe::some(&1));
        assert_eq!(tree.get_or_none("two"), Maybe::none());
    }
}
