//! TakeWhile cursor.

use core::fmt;
use lazyq_core::Cursor;

/// Cursor that ends at the first element failing a predicate.
#[derive(Clone)]
pub struct TakeWhileCursor<C, P> {
    inner: C,
    end: C,
    predicate: P,
}

impl<C, P> TakeWhileCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool + Clone,
{
    /// Wraps `inner`; if the first element already fails `predicate` the
    /// cursor starts at `end`.
    pub fn new(inner: C, end: C, predicate: P) -> Self {
        let mut cursor = Self {
            inner,
            end,
            predicate,
        };
        cursor.stop_if_rejected();
        cursor
    }

    /// The end check comes first: the position at `end` is never read.
    fn stop_if_rejected(&mut self) {
        if self.inner == self.end {
            return;
        }
        let accepted = match self.inner.current() {
            Some(value) => (self.predicate)(&value),
            None => false,
        };
        if !accepted {
            self.inner = self.end.clone();
        }
    }
}

impl<C: PartialEq, P> PartialEq for TakeWhileCursor<C, P> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C: fmt::Debug, P> fmt::Debug for TakeWhileCursor<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWhileCursor")
            .field("inner", &self.inner)
            .field("end", &self.end)
            .finish()
    }
}

impl<C, P> Cursor for TakeWhileCursor<C, P>
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
        self.inner.advance();
        self.stop_if_rejected();
    }
}
