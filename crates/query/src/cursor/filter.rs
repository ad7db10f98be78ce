//! Filter (where) cursor.

use core::fmt;
use lazyq_core::Cursor;

/// Cursor that only stops on elements satisfying a predicate.
///
/// Construction moves forward to the first matching element, so a
/// `FilterCursor` always rests either on a match or on `end`.
#[derive(Clone)]
pub struct FilterCursor<C, P> {
    inner: C,
    end: C,
    predicate: P,
}

impl<C, P> FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool + Clone,
{
    /// Wraps `inner`, skipping ahead to the first element where `predicate`
    /// holds, or to `end`.
    pub fn new(inner: C, end: C, predicate: P) -> Self {
        let mut cursor = Self {
            inner,
            end,
            predicate,
        };
        cursor.skip_rejected();
        cursor
    }

    fn skip_rejected(&mut self) {
        while self.inner != self.end {
            match self.inner.current() {
                Some(value) if !(self.predicate)(&value) => self.inner.advance(),
                _ => break,
            }
        }
    }
}

impl<C: PartialEq, P> PartialEq for FilterCursor<C, P> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C: fmt::Debug, P> fmt::Debug for FilterCursor<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterCursor")
            .field("inner", &self.inner)
            .field("end", &self.end)
            .finish()
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool + Clone,
{
    type Item = C::Item;

    #[inline]
    fn current(&self) -> Option<C::Item> {
        self.inner.current()
    }

    fn advance(&mut self) {
        if self.inner == self.end {
            return;
        }
        self.inner.advance();
        self.skip_rejected();
    }
}
