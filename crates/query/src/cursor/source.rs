//! Source cursor over a borrowed container.

use core::fmt;
use lazyq_core::Cursor;

/// Cursor over any exact-size, clonable iterator.
///
/// This is the position type behind `from(&container)`: slices, vectors,
/// ordered and hashed maps and sets, ranges. The cursor keeps the element at
/// its position in `head` and the remainder of the walk in `iter`; `pos`
/// counts how far it has moved and is what equality compares.
pub struct IterCursor<I: Iterator> {
    iter: I,
    head: Option<I::Item>,
    pos: usize,
}

impl<I> IterCursor<I>
where
    I: ExactSizeIterator + Clone,
    I::Item: Clone,
{
    /// Creates a cursor positioned on the first element of `iter`.
    pub fn begin(mut iter: I) -> Self {
        let head = iter.next();
        Self { iter, head, pos: 0 }
    }

    /// Creates the past-the-end cursor for `iter`.
    pub fn end(iter: I) -> Self {
        let pos = iter.len();
        Self {
            iter,
            head: None,
            pos,
        }
    }

    /// Creates the `(begin, end)` pair for `iter`.
    pub fn bounds(iter: I) -> (Self, Self) {
        let end = Self::end(iter.clone());
        (Self::begin(iter), end)
    }

    /// Returns how many times this cursor has advanced from the start.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<I> Clone for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            head: self.head.clone(),
            pos: self.pos,
        }
    }
}

impl<I: Iterator> PartialEq for IterCursor<I> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<I: Iterator> fmt::Debug for IterCursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterCursor").field("pos", &self.pos).finish()
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: ExactSizeIterator + Clone,
    I::Item: Clone,
{
    type Item = I::Item;

    #[inline]
    fn current(&self) -> Option<I::Item> {
        self.head.clone()
    }

    fn advance(&mut self) {
        // Saturates at the end of the data.
        if self.head.is_some() {
            self.head = self.iter.next();
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::vec;

    #[test]
    fn test_iter_cursor_walks_slice() {
        let data = vec![3, 1, 2];
        let (mut cur, end) = IterCursor::bounds(data.iter());

        assert_eq!(cur.current(), Some(&3));
        cur.advance();
        assert_eq!(cur.current(), Some(&1));
        cur.advance();
        cur.advance();
        assert!(cur == end);
        assert_eq!(cur.current(), None);
        assert_eq!(cur.position(), 3);
    }

    #[test]
    fn test_iter_cursor_advance_saturates() {
        let data: [i32; 0] = [];
        let (mut cur, end) = IterCursor::bounds(data.iter());
        assert!(cur == end);
        cur.advance();
        assert!(cur == end);
    }

    #[test]
    fn test_iter_cursor_clone_is_independent() {
        let data = vec![10, 20];
        let (cur, _) = IterCursor::bounds(data.iter());
        let mut other = cur.clone();
        other.advance();
        assert_eq!(cur.current(), Some(&10));
        assert_eq!(other.current(), Some(&20));
        assert!(cur != other);
    }

    #[test]
    fn test_iter_cursor_over_map() {
        let mut map = BTreeMap::new();
        map.insert(2, "b");
        map.insert(1, "a");
        let (cur, end) = IterCursor::bounds(map.iter());
        assert_eq!(cur.current(), Some((&1, &"a")));
        assert_eq!(end.position(), 2);
    }
}
