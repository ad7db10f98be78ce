//! Take cursor.

use lazyq_core::Cursor;

/// Cursor that stops after a fixed number of elements.
///
/// Once `count` elements have been consumed the inner cursor is moved
/// straight to `end`, so the remainder of the source is never visited.
#[derive(Clone, Debug)]
pub struct TakeCursor<C> {
    inner: C,
    end: C,
    count: usize,
    taken: usize,
}

impl<C: Cursor> TakeCursor<C> {
    /// Wraps `inner`, yielding at most `count` elements before `end`.
    pub fn new(inner: C, end: C, count: usize) -> Self {
        let inner = if count == 0 { end.clone() } else { inner };
        Self {
            inner,
            end,
            count,
            taken: 0,
        }
    }

    /// Number of elements consumed so far.
    #[inline]
    pub fn taken(&self) -> usize {
        self.taken
    }
}

impl<C: PartialEq> PartialEq for TakeCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    #[inline]
    fn current(&self) -> Option<C::Item> {
        self.inner.current()
    }

    fn advance(&mut self) {
        self.taken += 1;
        if self.taken == self.count {
            self.inner = self.end.clone();
        } else {
            self.inner.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::IterCursor;
    use alloc::vec;
    use alloc::vec::Vec;
    use lazyq_core::CursorIter;

    fn take(data: &[i32], count: usize) -> Vec<i32> {
        let (begin, end) = IterCursor::bounds(data.iter());
        let first = TakeCursor::new(begin, end.clone(), count);
        let last = TakeCursor::new(end.clone(), end, count);
        CursorIter::new(first, last).copied().collect()
    }

    #[test]
    fn test_take_prefix() {
        assert_eq!(take(&[4, 5, 6, 1], 2), vec![4, 5]);
    }

    #[test]
    fn test_take_zero_is_empty() {
        assert!(take(&[4, 5, 6], 0).is_empty());
    }

    #[test]
    fn test_take_more_than_len() {
        assert_eq!(take(&[1, 2, 3], 10), vec![1, 2, 3]);
    }

    #[test]
    fn test_take_jumps_to_end() {
        let data = vec![1, 2, 3, 4];
        let (begin, end) = IterCursor::bounds(data.iter());
        let mut cur = TakeCursor::new(begin, end.clone(), 1);
        cur.advance();
        assert_eq!(cur.taken(), 1);
        assert!(cur.inner == end);
    }
}
