//! Concat cursor.

use lazyq_core::Cursor;

/// Cursor over one range followed by another.
///
/// The cursor is in "first" mode while walking `A` and switches to "second"
/// mode once `A` reaches its end. Two concat cursors are equal only when they
/// are in the same mode and at the same position within that mode.
#[derive(Clone, Debug)]
pub struct ConcatCursor<A, B> {
    first: A,
    first_end: A,
    second: B,
    in_first: bool,
}

impl<A, B> ConcatCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    /// Creates a cursor at `first`, continuing with `second` after
    /// `first_end`. An empty first range starts directly in second mode.
    pub fn new(first: A, first_end: A, second: B) -> Self {
        let in_first = first != first_end;
        Self {
            first,
            first_end,
            second,
            in_first,
        }
    }

    /// Returns true while the cursor is still walking the first range.
    #[inline]
    pub fn in_first(&self) -> bool {
        self.in_first
    }
}

impl<A: PartialEq, B: PartialEq> PartialEq for ConcatCursor<A, B> {
    fn eq(&self, other: &Self) -> bool {
        if self.in_first != other.in_first {
            return false;
        }
        if self.in_first {
            self.first == other.first
        } else {
            self.second == other.second
        }
    }
}

impl<A, B> Cursor for ConcatCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn current(&self) -> Option<A::Item> {
        if self.in_first {
            self.first.current()
        } else {
            self.second.current()
        }
    }

    fn advance(&mut self) {
        if self.in_first {
            self.first.advance();
            if self.first == self.first_end {
                self.in_first = false;
            }
        } else {
            self.second.advance();
        }
    }
}
