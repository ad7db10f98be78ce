//! Shared-ownership storage cursor.
//!
//! A `StorageCursor` holds an `Rc` handle to its backing container next to
//! its position, so the container stays alive for as long as any cursor (and
//! therefore any `Sequence`) derived from it exists, independent of the scope
//! that created it.

use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;
use lazyq_core::Cursor;

/// Indexable container a `StorageCursor` can read from.
pub trait SharedStorage {
    /// Element type stored in the container.
    type Item;

    /// Number of stored elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`, if any.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns true if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> SharedStorage for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> SharedStorage for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> SharedStorage for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

impl<T, const N: usize> SharedStorage for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

/// Cursor that keeps its container alive through a shared handle.
///
/// Reading clones the element out of the container; equality compares the
/// handle identity and the position.
pub struct StorageCursor<S: ?Sized> {
    storage: Rc<S>,
    pos: usize,
}

impl<S: SharedStorage + ?Sized> StorageCursor<S> {
    /// Creates a cursor at the first element of `storage`.
    pub fn begin(storage: Rc<S>) -> Self {
        Self { storage, pos: 0 }
    }

    /// Creates the past-the-end cursor of `storage`.
    pub fn end(storage: Rc<S>) -> Self {
        let pos = storage.len();
        Self { storage, pos }
    }

    /// Returns the shared handle this cursor holds.
    #[inline]
    pub fn storage(&self) -> &Rc<S> {
        &self.storage
    }

    /// Returns the current index into the container.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<S: ?Sized> Clone for StorageCursor<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Rc::clone(&self.storage),
            pos: self.pos,
        }
    }
}

impl<S: ?Sized> PartialEq for StorageCursor<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage) && self.pos == other.pos
    }
}

impl<S: ?Sized> fmt::Debug for StorageCursor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageCursor")
            .field("pos", &self.pos)
            .field("handles", &Rc::strong_count(&self.storage))
            .finish()
    }
}

impl<S> Cursor for StorageCursor<S>
where
    S: SharedStorage + ?Sized,
    S::Item: Clone,
{
    type Item = S::Item;

    #[inline]
    fn current(&self) -> Option<S::Item> {
        self.storage.get(self.pos).cloned()
    }

    fn advance(&mut self) {
        if self.pos < self.storage.len() {
            self.pos += 1;
        }
    }
}
