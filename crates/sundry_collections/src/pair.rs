//! Owned key-value pairs.

use std::fmt;

/// A key paired with its value.
///
/// Maps in this crate hand out `KeyValuePair<&K, &V>`; use
/// [`cloned`](KeyValuePair::cloned) to detach it from the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyValuePair<K, V> {
    /// The key.
    pub key: K,
    /// The value stored under `key`.
    pub value: V,
}

impl<K, V> KeyValuePair<K, V> {
    /// Creates a new pair.
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Splits the pair into its key and value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sundry_collections::KeyValuePair;
    ///
    /// let (key, value) = KeyValuePair::new("answer", 42).deconstruct();
    /// assert_eq!(key, "answer");
    /// assert_eq!(value, 42);
    /// ```
    #[must_use]
    pub fn deconstruct(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Returns a pair of references into this pair.
    #[must_use]
    pub const fn as_refs(&self) -> KeyValuePair<&K, &V> {
        KeyValuePair {
            key: &self.key,
            value: &self.value,
        }
    }

    /// Replaces the value, keeping the key.
    #[must_use]
    pub fn map_value<W>(self, f: impl FnOnce(V) -> W) -> KeyValuePair<K, W> {
        KeyValuePair {
            key: self.key,
            value: f(self.value),
        }
    }
}

impl<K: Clone, V: Clone> KeyValuePair<&K, &V> {
    /// Clones the referenced key and value into an owned pair.
    #[must_use]
    pub fn cloned(self) -> KeyValuePair<K, V> {
        KeyValuePair {
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }
}

impl<K, V> From<(K, V)> for KeyValuePair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

impl<K, V> From<KeyValuePair<K, V>> for (K, V) {
    fn from(pair: KeyValuePair<K, V>) -> Self {
        pair.deconstruct()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for KeyValuePair<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.key, self.value)
    }
}
