//! Materialization into caller containers.

use super::Sequence;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use lazyq_core::Cursor;

#[cfg(feature = "hash")]
use core::hash::Hash;
#[cfg(feature = "hash")]
use hashbrown::{HashMap, HashSet};

/// Container accepting `(key, value)` pairs from `insert_keyed_into`.
///
/// Maps insert only when the key is absent: an existing entry is kept and
/// the first element per new key wins. Pair vectors act as multimaps and
/// keep every pair.
pub trait KeyedSink<K, V> {
    /// Inserts `value` under `key`.
    fn insert_keyed(&mut self, key: K, value: V);
}

impl<K: Ord, V> KeyedSink<K, V> for BTreeMap<K, V> {
    #[inline]
    fn insert_keyed(&mut self, key: K, value: V) {
        self.entry(key).or_insert(value);
    }
}

#[cfg(feature = "hash")]
impl<K: Hash + Eq, V> KeyedSink<K, V> for HashMap<K, V> {
    #[inline]
    fn insert_keyed(&mut self, key: K, value: V) {
        self.entry(key).or_insert(value);
    }
}

impl<K, V> KeyedSink<K, V> for Vec<(K, V)> {
    #[inline]
    fn insert_keyed(&mut self, key: K, value: V) {
        self.push((key, value));
    }
}

impl<C: Cursor> Sequence<C> {
    /// Collects the elements into a `Vec`, in traversal order.
    pub fn to_vec(&self) -> Vec<C::Item> {
        self.iter().collect()
    }

    /// Collects the elements into any `FromIterator` container.
    pub fn collect<B: FromIterator<C::Item>>(&self) -> B {
        self.iter().collect()
    }

    /// Appends every element to `container` (push / emplace / set insert,
    /// depending on the container's `Extend` semantics).
    pub fn extend_into<E: Extend<C::Item>>(&self, container: &mut E) {
        container.extend(self.iter());
    }

    /// Inserts a `(key_fn(e), e)` pair per element into `container`,
    /// following its `KeyedSink` semantics.
    pub fn insert_keyed_into<K, E, F>(&self, container: &mut E, key_fn: F)
    where
        E: KeyedSink<K, C::Item>,
        F: Fn(&C::Item) -> K,
    {
        for value in self.iter() {
            container.insert_keyed(key_fn(&value), value);
        }
    }

    /// Collects the distinct elements into a `BTreeSet`.
    pub fn to_btree_set(&self) -> BTreeSet<C::Item>
    where
        C::Item: Ord,
    {
        self.iter().collect()
    }

    /// Builds a `BTreeMap` keyed by `key_fn`; the first element per key wins.
    pub fn to_btree_map<K, F>(&self, key_fn: F) -> BTreeMap<K, C::Item>
    where
        K: Ord,
        F: Fn(&C::Item) -> K,
    {
        let mut map = BTreeMap::new();
        self.insert_keyed_into(&mut map, key_fn);
        map
    }

    /// Collects the distinct elements into a hash set.
    #[cfg(feature = "hash")]
    pub fn to_hash_set(&self) -> HashSet<C::Item>
    where
        C::Item: Hash + Eq,
    {
        self.iter().collect()
    }

    /// Builds a hash map keyed by `key_fn`; the first element per key wins.
    #[cfg(feature = "hash")]
    pub fn to_hash_map<K, F>(&self, key_fn: F) -> HashMap<K, C::Item>
    where
        K: Hash + Eq,
        F: Fn(&C::Item) -> K,
    {
        let mut map = HashMap::new();
        self.insert_keyed_into(&mut map, key_fn);
        map
    }
}
