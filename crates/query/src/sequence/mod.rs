//! The `Sequence` view and its lazy composition operators.
//!
//! Composition wraps the current cursor pair in a new adaptor cursor and
//! returns a new `Sequence`. No element is produced until a terminal
//! operator walks the range, and every terminal call walks it afresh from
//! `begin`.

mod aggregate;
mod drain;
mod materialize;
mod scalar;

use crate::cursor::{
    ConcatCursor, FilterCursor, SelectCursor, SkipCursor, SkipWhileCursor, StorageCursor,
    TakeCursor, TakeWhileCursor,
};
use alloc::vec::Vec;
use lazyq_core::{Cursor, CursorIter};

pub use drain::SinkSequence;
pub use materialize::KeyedSink;

/// Sequence over a vector owned through a shared handle.
///
/// Returned by the drain operators (`group_by`, `order_by`, `join`).
pub type OwnedSequence<T> = Sequence<StorageCursor<Vec<T>>>;

/// Immutable half-open range `[begin, end)` of cursors.
#[derive(Clone, Debug)]
pub struct Sequence<C> {
    begin: C,
    end: C,
}

impl<C: Cursor> Sequence<C> {
    /// Creates a sequence from a cursor pair.
    pub fn new(begin: C, end: C) -> Self {
        Self { begin, end }
    }

    /// Returns a copy of the begin cursor.
    #[inline]
    pub fn begin(&self) -> C {
        self.begin.clone()
    }

    /// Returns a copy of the end cursor.
    #[inline]
    pub fn end(&self) -> C {
        self.end.clone()
    }

    /// Returns an iterator walking the sequence from the start.
    #[inline]
    pub fn iter(&self) -> CursorIter<C> {
        CursorIter::new(self.begin.clone(), self.end.clone())
    }

    /// Projects every element through `function`.
    pub fn select<F, U>(&self, function: F) -> Sequence<SelectCursor<C, F>>
    where
        F: Fn(C::Item) -> U + Clone,
    {
        Sequence::new(
            SelectCursor::new(self.begin(), function.clone()),
            SelectCursor::new(self.end(), function),
        )
    }

    /// Keeps the elements satisfying `predicate` (LINQ `Where`).
    pub fn filter<P>(&self, predicate: P) -> Sequence<FilterCursor<C, P>>
    where
        P: Fn(&C::Item) -> bool + Clone,
    {
        Sequence::new(
            FilterCursor::new(self.begin(), self.end(), predicate.clone()),
            FilterCursor::new(self.end(), self.end(), predicate),
        )
    }

    /// Yields at most the first `count` elements.
    pub fn take(&self, count: usize) -> Sequence<TakeCursor<C>> {
        Sequence::new(
            TakeCursor::new(self.begin(), self.end(), count),
            TakeCursor::new(self.end(), self.end(), count),
        )
    }

    /// Starts `count - 1` elements in (nothing is skipped for `count <= 1`).
    pub fn skip(&self, count: usize) -> Sequence<SkipCursor<C>> {
        Sequence::new(
            SkipCursor::new(self.begin(), &self.end, count),
            SkipCursor::new(self.end(), &self.end, 0),
        )
    }

    /// Yields elements up to, excluding, the first one failing `predicate`.
    pub fn take_while<P>(&self, predicate: P) -> Sequence<TakeWhileCursor<C, P>>
    where
        P: Fn(&C::Item) -> bool + Clone,
    {
        Sequence::new(
            TakeWhileCursor::new(self.begin(), self.end(), predicate.clone()),
            TakeWhileCursor::new(self.end(), self.end(), predicate),
        )
    }

    /// Drops the first element if it satisfies `predicate`.
    ///
    /// Only the leading element is tested; a run of matching elements is not
    /// skipped.
    pub fn skip_while<P>(&self, predicate: P) -> Sequence<SkipWhileCursor<C>>
    where
        P: Fn(&C::Item) -> bool,
    {
        Sequence::new(
            SkipWhileCursor::new(self.begin(), &self.end, &predicate),
            SkipWhileCursor::new(self.end(), &self.end, &predicate),
        )
    }

    /// Yields this sequence followed by `other`.
    pub fn concat<C2>(&self, other: &Sequence<C2>) -> Sequence<ConcatCursor<C, C2>>
    where
        C2: Cursor<Item = C::Item>,
    {
        Sequence::new(
            ConcatCursor::new(self.begin(), self.end(), other.begin()),
            ConcatCursor::new(self.end(), self.end(), other.end()),
        )
    }
}

impl<'a, C, T> Sequence<C>
where
    C: Cursor<Item = &'a T>,
    T: 'a,
{
    /// Dereferences borrowed elements by copy.
    pub fn copied(&self) -> Sequence<SelectCursor<C, fn(&'a T) -> T>>
    where
        T: Copy,
    {
        self.select(copy_item as fn(&'a T) -> T)
    }

    /// Dereferences borrowed elements by clone.
    pub fn cloned(&self) -> Sequence<SelectCursor<C, fn(&'a T) -> T>>
    where
        T: Clone,
    {
        self.select(clone_item as fn(&'a T) -> T)
    }
}

fn copy_item<T: Copy>(item: &T) -> T {
    *item
}

fn clone_item<T: Clone>(item: &T) -> T {
    item.clone()
}

impl<'s, C: Cursor> IntoIterator for &'s Sequence<C> {
    type Item = C::Item;
    type IntoIter = CursorIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
