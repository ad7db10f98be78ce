//! The cursor contract shared by every sequence adaptor.

/// A movable position over a sequence.
///
/// A range is described by two cursors, `begin` and `end`; a cursor "has
/// more" exactly while it compares unequal to `end`. Equality therefore
/// means "denotes the same end-of-traversal condition", which for simple
/// cursors is the same position and for composite cursors (such as
/// concatenation) also includes their internal mode.
///
/// Cursors are cloned freely: a `Sequence` keeps its `begin` untouched and
/// walks a clone on every traversal.
pub trait Cursor: Clone + PartialEq {
    /// The value produced at each position.
    type Item;

    /// Returns the value at the current position.
    ///
    /// Returns `None` only when the cursor sits past the data it reads from.
    fn current(&self) -> Option<Self::Item>;

    /// Moves to the next position.
    fn advance(&mut self);
}

/// Iterator over the half-open range `[begin, end)` of two cursors.
#[derive(Clone)]
pub struct CursorIter<C> {
    cursor: C,
    end: C,
}

impl<C: Cursor> CursorIter<C> {
    /// Creates an iterator walking from `begin` up to, but excluding, `end`.
    #[inline]
    pub fn new(begin: C, end: C) -> Self {
        Self { cursor: begin, end }
    }

    /// Returns true once the walk has reached `end`.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.end
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.end {
            return None;
        }
        let value = self.cursor.current()?;
        self.cursor.advance();
        Some(value)
    }
}

impl<C: Cursor> core::iter::FusedIterator for CursorIter<C> {}
