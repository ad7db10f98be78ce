//! Scalar extraction: emptiness, count, first, last and positional access.

use super::Sequence;
use lazyq_core::{Cursor, Error, Result};
use tracing::debug;

impl<C: Cursor> Sequence<C> {
    /// Returns true if the sequence has no elements. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Counts the elements by advancing from `begin` to `end`.
    ///
    /// Only cursor positions are walked; projections are not applied.
    pub fn count(&self) -> usize {
        let mut cursor = self.begin();
        let mut count = 0;
        while cursor != self.end {
            cursor.advance();
            count += 1;
        }
        count
    }

    /// Returns the first element.
    pub fn first(&self) -> Result<C::Item> {
        if self.is_empty() {
            debug!("first() called on an empty sequence");
            return Err(Error::empty_collection());
        }
        self.begin.current().ok_or_else(Error::empty_collection)
    }

    /// Returns the first element, or `default` if the sequence is empty.
    pub fn first_or_default(&self, default: C::Item) -> C::Item {
        if self.is_empty() {
            return default;
        }
        self.begin.current().unwrap_or(default)
    }

    /// Returns the last element.
    pub fn last(&self) -> Result<C::Item> {
        if self.is_empty() {
            debug!("last() called on an empty sequence");
            return Err(Error::empty_collection());
        }
        self.last_cursor()
            .current()
            .ok_or_else(Error::empty_collection)
    }

    /// Returns the last element, or `default` if the sequence is empty.
    pub fn last_or_default(&self, default: C::Item) -> C::Item {
        if self.is_empty() {
            return default;
        }
        self.last_cursor().current().unwrap_or(default)
    }

    /// Returns the element at `index` (0-based).
    pub fn at(&self, index: usize) -> Result<C::Item> {
        let mut cursor = self.begin();
        for step in 0..index {
            if cursor == self.end {
                debug!(index, len = step, "at() index out of range");
                return Err(Error::index_out_of_range(index, step));
            }
            cursor.advance();
        }
        if cursor == self.end {
            debug!(index, len = index, "at() index out of range");
            return Err(Error::index_out_of_range(index, index));
        }
        cursor
            .current()
            .ok_or_else(|| Error::index_out_of_range(index, index))
    }

    /// Cursor resting on the final element. Requires a non-empty sequence.
    fn last_cursor(&self) -> C {
        let mut last = self.begin();
        let mut cursor = self.begin();
        while cursor != self.end {
            last = cursor.clone();
            cursor.advance();
        }
        last
    }
}
