//! SkipWhile cursor.

use lazyq_core::Cursor;

/// Cursor that drops a leading element satisfying a predicate.
///
/// Only the first element is tested: if it matches, the cursor starts one
/// position in, otherwise it starts at the beginning. Later elements are
/// never tested, matching the behaviour existing callers rely on.
#[derive(Clone, Debug)]
pub struct SkipWhileCursor<C> {
    inner: C,
}

impl<C: Cursor> SkipWhileCursor<C> {
    /// Wraps `inner`, stepping over its first element if `predicate` holds.
    pub fn new<P>(inner: C, end: &C, predicate: P) -> Self
    where
        P: Fn(&C::Item) -> bool,
    {
        let mut inner = inner;
        if inner != *end {
            if let Some(value) = inner.current() {
                if predicate(&value) {
                    inner.advance();
                }
            }
        }
        Self { inner }
    }
}

impl<C: PartialEq> PartialEq for SkipWhileCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C: Cursor> Cursor for SkipWhileCursor<C> {
    type Item = C::Item;

    #[inline]
    fn current(&self) -> Option<C::Item> {
        self.inner.current()
    }

    #[inline]
    fn advance(&mut self) {
        self.inner.advance();
    }
}
