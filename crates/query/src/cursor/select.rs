//! Select (projection) cursor.

use core::fmt;
use lazyq_core::Cursor;

/// Cursor that applies a projection to every element of its inner cursor.
///
/// The projection runs on every `current` call and may change the element
/// type.
#[derive(Clone)]
pub struct SelectCursor<C, F> {
    inner: C,
    function: F,
}

impl<C, F> SelectCursor<C, F> {
    /// Wraps `inner` with `function`.
    pub fn new(inner: C, function: F) -> Self {
        Self { inner, function }
    }
}

impl<C: PartialEq, F> PartialEq for SelectCursor<C, F> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C: fmt::Debug, F> fmt::Debug for SelectCursor<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectCursor").field("inner", &self.inner).finish()
    }
}

impl<C, F, U> Cursor for SelectCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U + Clone,
{
    type Item = U;

    #[inline]
    fn current(&self) -> Option<U> {
        self.inner.current().map(&self.function)
    }

    #[inline]
    fn advance(&mut self) {
        self.inner.advance();
    }
}
