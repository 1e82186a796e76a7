//! Projections that drop absent results.
//!
//! `Option` stands in for both a null reference and an empty nullable value,
//! so the "non-null" and "has-value" families are one and the same here.
//! All adaptors are lazy: nothing runs until the consumer pulls, the
//! transform runs at most once per source element, and source order is kept.

use std::fmt;
use std::iter::FusedIterator;

/// Iterator returned by [`SelectExt::select_non_null`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SelectNonNull<I, F> {
    iter: I,
    f: F,
}

impl<I: fmt::Debug, F> fmt::Debug for SelectNonNull<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectNonNull")
            .field("iter", &self.iter)
            .finish_non_exhaustive()
    }
}

impl<I, U, F> Iterator for SelectNonNull<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Option<U>,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        for item in self.iter.by_ref() {
            if let Some(selected) = (self.f)(item) {
                return Some(selected);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, U, F> FusedIterator for SelectNonNull<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> Option<U>,
{
}

/// Iterator returned by [`SelectExt::select_non_null_indexed`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SelectNonNullIndexed<I, F> {
    iter: I,
    f: F,
    index: usize,
}

impl<I: fmt::Debug, F> fmt::Debug for SelectNonNullIndexed<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectNonNullIndexed")
            .field("iter", &self.iter)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<I, U, F> Iterator for SelectNonNullIndexed<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> Option<U>,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        for item in self.iter.by_ref() {
            let index = self.index;
            self.index += 1;
            if let Some(selected) = (self.f)(item, index) {
                return Some(selected);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, U, F> FusedIterator for SelectNonNullIndexed<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item, usize) -> Option<U>,
{
}

/// Iterator returned by [`SelectExt::select_many_non_null`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SelectManyNonNull<I, F, U: IntoIterator> {
    iter: I,
    f: F,
    front: Option<U::IntoIter>,
}

impl<I, F, U> Clone for SelectManyNonNull<I, F, U>
where
    I: Clone,
    F: Clone,
    U: IntoIterator,
    U::IntoIter: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            f: self.f.clone(),
            front: self.front.clone(),
        }
    }
}

impl<I, F, U> fmt::Debug for SelectManyNonNull<I, F, U>
where
    I: fmt::Debug,
    U: IntoIterator,
    U::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectManyNonNull")
            .field("iter", &self.iter)
            .field("front", &self.front)
            .finish_non_exhaustive()
    }
}

impl<I, F, U, T> Iterator for SelectManyNonNull<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator<Item = Option<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(inner) = &mut self.front {
                if let Some(selected) = inner.by_ref().flatten().next() {
                    return Some(selected);
                }
                self.front = None;
            }
            let item = self.iter.next()?;
            self.front = Some((self.f)(item).into_iter());
        }
    }
}

impl<I, F, U, T> FusedIterator for SelectManyNonNull<I, F, U>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator<Item = Option<T>>,
{
}

/// Iterator returned by [`SelectExt::select_many_non_null_indexed`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SelectManyNonNullIndexed<I, F, U: IntoIterator> {
    iter: I,
    f: F,
    index: usize,
    front: Option<U::IntoIter>,
}

impl<I, F, U> Clone for SelectManyNonNullIndexed<I, F, U>
where
    I: Clone,
    F: Clone,
    U: IntoIterator,
    U::IntoIter: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            f: self.f.clone(),
            index: self.index,
            front: self.front.clone(),
        }
    }
}

impl<I, F, U> fmt::Debug for SelectManyNonNullIndexed<I, F, U>
where
    I: fmt::Debug,
    U: IntoIterator,
    U::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectManyNonNullIndexed")
            .field("iter", &self.iter)
            .field("index", &self.index)
            .field("front", &self.front)
            .finish_non_exhaustive()
    }
}

impl<I, F, U, T> Iterator for SelectManyNonNullIndexed<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> U,
    U: IntoIterator<Item = Option<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(inner) = &mut self.front {
                if let Some(selected) = inner.by_ref().flatten().next() {
                    return Some(selected);
                }
                self.front = None;
            }
            let item = self.iter.next()?;
            let index = self.index;
            self.index += 1;
            self.front = Some((self.f)(item, index).into_iter());
        }
    }
}

impl<I, F, U, T> FusedIterator for SelectManyNonNullIndexed<I, F, U>
where
    I: FusedIterator,
    F: FnMut(I::Item, usize) -> U,
    U: IntoIterator<Item = Option<T>>,
{
}

/// Iterator returned by [`SelectExt::non_null`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct NonNull<I> {
    iter: I,
}

impl<I, T> Iterator for NonNull<I>
where
    I: Iterator<Item = Option<T>>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.by_ref().flatten().next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, T> DoubleEndedIterator for NonNull<I>
where
    I: DoubleEndedIterator<Item = Option<T>>,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.by_ref().rev().flatten().next()
    }
}

impl<I, T> FusedIterator for NonNull<I> where I: FusedIterator<Item = Option<T>> {}

/// Nullable-filtering projections for any iterator.
///
/// # Examples
///
/// ```
/// use sundry_collections::SelectExt;
///
/// let raw = ["4", "x", "15", "", "8"];
/// let parsed: Vec<u32> = raw.iter().select_non_null(|s| s.parse().ok()).collect();
/// assert_eq!(parsed, vec![4, 15, 8]);
///
/// let sparse = [Some('a'), None, Some('b')];
/// assert_eq!(sparse.into_iter().non_null().collect::<String>(), "ab");
/// ```
pub trait SelectExt: Iterator + Sized {
    /// Applies `f` and keeps only the `Some` results, unwrapped.
    fn select_non_null<U, F>(self, f: F) -> SelectNonNull<Self, F>
    where
        F: FnMut(Self::Item) -> Option<U>,
    {
        SelectNonNull { iter: self, f }
    }

    /// Same as [`select_non_null`](SelectExt::select_non_null); kept for
    /// callers that think of the result as an optional value type.
    fn select_has_value<U, F>(self, f: F) -> SelectNonNull<Self, F>
    where
        F: FnMut(Self::Item) -> Option<U>,
    {
        self.select_non_null(f)
    }

    /// Like [`select_non_null`](SelectExt::select_non_null), but `f` also
    /// receives the zero-based position of the source element.
    fn select_non_null_indexed<U, F>(self, f: F) -> SelectNonNullIndexed<Self, F>
    where
        F: FnMut(Self::Item, usize) -> Option<U>,
    {
        SelectNonNullIndexed {
            iter: self,
            f,
            index: 0,
        }
    }

    /// Maps each element to a sequence of optional values, flattens, and
    /// keeps only the `Some` values.
    fn select_many_non_null<U, T, F>(self, f: F) -> SelectManyNonNull<Self, F, U>
    where
        F: FnMut(Self::Item) -> U,
        U: IntoIterator<Item = Option<T>>,
    {
        SelectManyNonNull {
            iter: self,
            f,
            front: None,
        }
    }

    /// Same as [`select_many_non_null`](SelectExt::select_many_non_null).
    fn select_many_has_value<U, T, F>(self, f: F) -> SelectManyNonNull<Self, F, U>
    where
        F: FnMut(Self::Item) -> U,
        U: IntoIterator<Item = Option<T>>,
    {
        self.select_many_non_null(f)
    }

    /// Indexed form of [`select_many_non_null`](SelectExt::select_many_non_null).
    fn select_many_non_null_indexed<U, T, F>(self, f: F) -> SelectManyNonNullIndexed<Self, F, U>
    where
        F: FnMut(Self::Item, usize) -> U,
        U: IntoIterator<Item = Option<T>>,
    {
        SelectManyNonNullIndexed {
            iter: self,
            f,
            index: 0,
            front: None,
        }
    }

    /// Drops the `None` entries of a sequence of options.
    fn non_null<T>(self) -> NonNull<Self>
    where
        Self: Iterator<Item = Option<T>>,
    {
        NonNull { iter: self }
    }

    /// Returns the first element, or `None` for an empty sequence.
    fn first_or_none(mut self) -> Option<Self::Item> {
        self.next()
    }

    /// Returns the first element matching `predicate`, or `None`.
    fn first_or_none_where<P>(mut self, predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate)
    }
}

impl<I: Iterator> SelectExt for I {}
