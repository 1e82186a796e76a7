//! Lookups that never fail on a missing key.
//!
//! [`MapLookup`] is implemented for the standard and `im` maps. A missing
//! key is an expected outcome and is reported through the return value; a
//! present key is always returned as stored, even when its value is zero,
//! `false` or empty.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::pair::KeyValuePair;

/// Read-only lookups with a fallback.
pub trait MapLookup<K, V> {
    /// Returns the value stored under `key`.
    fn lookup(&self, key: &K) -> Option<&V>;

    /// Iterates over the entries in the map's own order.
    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a;

    /// Returns the stored value, or `default` if `key` is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use sundry_collections::MapLookup;
    ///
    /// let stock = HashMap::from([("apples", 0), ("pears", 4)]);
    /// assert_eq!(stock.get_value_or(&"apples", 10), 0);
    /// assert_eq!(stock.get_value_or(&"plums", 10), 10);
    /// ```
    #[must_use]
    fn get_value_or(&self, key: &K, default: V) -> V
    where
        V: Clone,
    {
        self.lookup(key).cloned().unwrap_or(default)
    }

    /// Returns the stored value, or `V::default()` if `key` is absent.
    #[must_use]
    fn get_value_or_default(&self, key: &K) -> V
    where
        V: Clone + Default,
    {
        self.lookup(key).cloned().unwrap_or_default()
    }

    /// Returns a copy of the stored value, or `None` if `key` is absent.
    #[must_use]
    fn get_value_or_none(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.lookup(key).cloned()
    }

    /// Borrowing variant of [`get_value_or`](MapLookup::get_value_or).
    #[must_use]
    fn get_ref_or<'a>(&'a self, key: &K, default: &'a V) -> &'a V {
        self.lookup(key).unwrap_or(default)
    }

    /// Iterates over the entries as [`KeyValuePair`]s.
    fn pairs<'a>(&'a self) -> impl Iterator<Item = KeyValuePair<&'a K, &'a V>>
    where
        K: 'a,
        V: 'a,
    {
        self.entries().map(KeyValuePair::from)
    }
}

impl<K, V, S> MapLookup<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

impl<K: Ord, V> MapLookup<K, V> for BTreeMap<K, V> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

impl<K, V, S> MapLookup<K, V> for im::HashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

impl<K, V> MapLookup<K, V> for im::OrdMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}
