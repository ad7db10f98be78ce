//! Skip cursor.

use lazyq_core::Cursor;

/// Cursor that starts a fixed distance into its inner cursor.
///
/// The construction loop decrements `count` before testing it, so a
/// `SkipCursor` built with `count` moves past `count - 1` elements (none for
/// `count <= 1`). Callers of the existing API depend on that offset.
#[derive(Clone, Debug)]
pub struct SkipCursor<C> {
    inner: C,
}

impl<C: Cursor> SkipCursor<C> {
    /// Wraps `inner`, moving it forward before the first element is read.
    pub fn new(inner: C, end: &C, count: usize) -> Self {
        let mut inner = inner;
        let mut remaining = count;
        while inner != *end {
            remaining = remaining.saturating_sub(1);
            if remaining == 0 {
                break;
            }
            inner.advance();
        }
        Self { inner }
    }
}

impl<C: PartialEq> PartialEq for SkipCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C: Cursor> Cursor for SkipCursor<C> {
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
