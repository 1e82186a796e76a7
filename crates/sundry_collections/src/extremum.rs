//! Position of the largest or smallest element of a sequence.
//!
//! Every search is a single forward pass. The champion is only replaced by
//! an element that compares strictly greater (or strictly less), so ties
//! resolve to the first occurrence. An empty sequence yields `-1`.
//!
//! Two index widths are offered: the `index_of_*` family reports an `i32`
//! and the `long_index_of_*` family an `i64`. A sequence with more elements
//! than the index type can address fails with
//! [`ErrorKind::IndexOverflow`](sundry_foundation::ErrorKind::IndexOverflow).

use std::cmp::Ordering;

use sundry_foundation::{Error, Result, SequenceIndex};

fn extremum_index<X, T, I, F>(iter: I, mut compare: F, wanted: Ordering) -> Result<X>
where
    X: SequenceIndex,
    I: Iterator<Item = T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut best: Option<(X, T)> = None;

    for (position, item) in iter.enumerate() {
        let index = X::from_position(position).ok_or_else(|| Error::index_overflow(X::BITS))?;
        let replace = match &best {
            None => true,
            Some((_, champion)) => compare(&item, champion) == wanted,
        };
        if replace {
            best = Some((index, item));
        }
    }

    Ok(best.map_or(X::MINUS_ONE, |(index, _)| index))
}

fn extremum_index_by_key<X, T, K, I, F>(iter: I, mut key: F, wanted: Ordering) -> Result<X>
where
    X: SequenceIndex,
    K: Ord,
    I: Iterator<Item = T>,
    F: FnMut(&T) -> K,
{
    extremum_index(iter.map(|item| key(&item)), Ord::cmp, wanted)
}

/// Index-of-extremum searches for any iterator.
///
/// # Examples
///
/// ```
/// use sundry_collections::ExtremumExt;
///
/// let readings = [3, 9, 2, 9, 1];
/// assert_eq!(readings.iter().index_of_max().unwrap(), 1);
/// assert_eq!(readings.iter().index_of_min().unwrap(), 4);
/// assert_eq!(std::iter::empty::<u8>().index_of_max().unwrap(), -1);
///
/// let temps = [21.5_f64, 19.0, 23.25];
/// assert_eq!(temps.iter().index_of_max_by(|a, b| a.total_cmp(b)).unwrap(), 2);
/// ```
pub trait ExtremumExt: Iterator + Sized {
    /// Index of the first maximal element, using the natural ordering.
    ///
    /// # Errors
    ///
    /// Returns `IndexOverflow` if the sequence has more than `i32::MAX + 1`
    /// elements.
    fn index_of_max(self) -> Result<i32>
    where
        Self::Item: Ord,
    {
        extremum_index(self, Ord::cmp, Ordering::Greater)
    }

    /// Index of the first element whose projected key is maximal.
    ///
    /// `key` runs exactly once per element.
    ///
    /// # Errors
    ///
    /// Returns `IndexOverflow` if the sequence has more than `i32::MAX + 1`
    /// elements.
    fn index_of_max_by_key<K, F>(self, key: F) -> Result<i32>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        extremum_index_by_key(self, key, Ordering::Greater)
    }

    /// Index of the first maximal element according to `compare`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOverflow` if the sequence has more than `i32::MAX + 1`
    /// elements.
    fn index_of_max_by<F>(self, compare: F) -> Result<i32>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        extremum_index(self, compare, Ordering::Greater)
    }

    /// Index of the first minimal element, using the natural ordering.
    ///
    /// # Errors
    ///
    /// Returns `IndexOverflow` if the sequence has more than `i32::MAX + 1`
    /// elements.
    fn index_of_min(self) -> Result<i32>
    where
        Self::Item: Ord,
    {
        extremum_index(self, Ord::cmp, Ordering::Less)
    }

    /// Index of the first element whose projected key is minimal.
    ///
    /// # Errors
    ///
    /// Returns `IndexOverflow` if the sequence has more than `i32::MAX + 1`
    /// elements.
    fn index_of_min_by_key<K, F>(self, key: F) -> Result<i32>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        extremum_index_by_key(self, key, Ordering::Less)
    }

    /// Index of the first minimal element according to `compare`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOverflow` if the sequence has more than `i32::MAX + 1`
    /// elements.
    fn index_of_min_by<F>(self, compare: F) -> Result<i32>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        extremum_index(self, compare, Ordering::Less)
    }

    /// 64-bit variant of [`index_of_max`](ExtremumExt::index_of_max).
    ///
    /// # Errors
    ///
    /// Returns `IndexOverflow` if a position does not fit in an `i64`.
    fn long_index_of_max(self) -> Result<i64>
    where
        Self::Item: Ord,
    {
        extremum_index(self, Ord::cmp, Ordering::Greater)
    }

    /// 64-bit variant of [`index_of_max_by_key`](ExtremumExt::index_of_max_by_key).
    ///
    /// # Errors
    ///
    /// Returns `IndexOverflow` if a position does not fit in an `i64`.
    fn long_index_of_max_by_key<K, F>(self, key: F) -> Result<i64>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        extremum_index_by_key(self, key, Ordering::Greater)
    }

    /// 64-bit variant of [`index_of_max_by`](ExtremumExt::index_of_max_by).
    ///
    /// # Errors
    ///
    /// Returns `IndexOverflow` if a position does not fit in an `i64`.
    fn long_index_of_max_by<F>(self, compare: F) -> Result<i64>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        extremum_index(self, compare, Ordering::Greater)
    }

    /// 64-bit variant of [`index_of_min`](ExtremumExt::index_of_min).
    ///
    /// # Errors
    ///
    /// Returns `IndexOverflow` if a position does not fit in an `i64`.
    fn long_index_of_min(self) -> Result<i64>
    where
        Self::Item: Ord,
    {
        extremum_index(self, Ord::cmp, Ordering::Less)
    }

    /// 64-bit variant of [`index_of_min_by_key`](ExtremumExt::index_of_min_by_key).
    ///
    /// # Errors
    ///
    /// Returns `IndexOverflow` if a position does not fit in an `i64`.
    fn long_index_of_min_by_key<K, F>(self, key: F) -> Result<i64>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        extremum_index_by_key(self, key, Ordering::Less)
    }

    /// 64-bit variant of [`index_of_min_by`](ExtremumExt::index_of_min_by).
    ///
    /// # Errors
    ///
    /// Returns `IndexOverflow` if a position does not fit in an `i64`.
    fn long_index_of_min_by<F>(self, compare: F) -> Result<i64>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        extremum_index(self, compare, Ordering::Less)
    }
}

impl<I: Iterator> ExtremumExt for I {}
