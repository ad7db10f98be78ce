//! Entry points that build a `Sequence` from a source.

use crate::cursor::{IterCursor, SharedStorage, StorageCursor};
use crate::Sequence;
use alloc::rc::Rc;
use lazyq_core::Cursor;

/// Builds a non-owning sequence over a container.
///
/// Accepts anything whose iterator is exact-size and clonable: `&Vec<T>`,
/// `&[T]`, `&BTreeMap<K, V>`, `&hashbrown::HashSet<T>`, ranges and so on.
/// The borrow ties every derived sequence to the container's lifetime.
pub fn from<T>(container: T) -> Sequence<IterCursor<T::IntoIter>>
where
    T: IntoIterator,
    T::IntoIter: ExactSizeIterator + Clone,
    T::Item: Clone,
{
    let (begin, end) = IterCursor::bounds(container.into_iter());
    Sequence::new(begin, end)
}

/// Builds a sequence directly from a cursor pair.
pub fn from_cursors<C: Cursor>(begin: C, end: C) -> Sequence<C> {
    Sequence::new(begin, end)
}

/// Builds a sequence whose cursors share ownership of `storage`.
///
/// The container lives as long as the longest-lived cursor derived from the
/// returned sequence, even after the caller drops its own handle.
///
/// Only indexable containers implement `SharedStorage` (`Vec`, slices,
/// `VecDeque`, arrays). Ordered maps and sets are not positionally
/// addressable; collect them into a `Vec` first, which keeps their
/// iteration order.
pub fn from_shared<S>(storage: Rc<S>) -> Sequence<StorageCursor<S>>
where
    S: SharedStorage + ?Sized,
    S::Item: Clone,
{
    let begin = StorageCursor::begin(Rc::clone(&storage));
    let end = StorageCursor::end(storage);
    Sequence::new(begin, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_from_vec_and_range() {
        let v = vec![1, 2, 3];
        assert_eq!(from(&v).count(), 3);
        assert_eq!(from(0..4).to_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_from_map_iterates_in_key_order() {
        let mut map = BTreeMap::new();
        map.insert("b", 2);
        map.insert("a", 1);
        let keys: Vec<&str> = from(&map).select(|(k, _)| *k).to_vec();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_from_cursors_sub_range() {
        let v = vec![10, 20, 30, 40];
        let whole = from(&v);
        let mut begin = whole.begin();
        begin.advance();
        let mut end = begin.clone();
        end.advance();
        end.advance();

        let middle = from_cursors(begin, end);
        assert_eq!(middle.copied().to_vec(), vec![20, 30]);
        assert_eq!(middle.last(), Ok(&30));
    }

    #[test]
    fn test_from_shared_outlives_handle() {
        let seq = {
            let storage = Rc::new(vec![4, 5, 6]);
            from_shared(storage)
        };
        assert_eq!(seq.to_vec(), vec![4, 5, 6]);
        assert_eq!(Rc::strong_count(seq.begin().storage()), 3);
    }

    #[test]
    fn test_from_shared_ordered_set_via_vec() {
        let set: alloc::collections::BTreeSet<i32> = [3, 1, 2].into_iter().collect();
        let shared: Rc<Vec<i32>> = Rc::new(set.into_iter().collect());
        assert_eq!(from_shared(shared).to_vec(), vec![1, 2, 3]);

        let array = from_shared(Rc::new([7, 8, 9]));
        assert_eq!(array.last(), Ok(9));
    }

    #[cfg(feature = "hash")]
    #[test]
    fn test_from_hashbrown_containers() {
        let set: hashbrown::HashSet<i32> = [4, 5, 6].into_iter().collect();
        let seq = from(&set).copied();
        assert_eq!(seq.count(), 3);
        assert_eq!(seq.sum(), Ok(15));

        let mut map = hashbrown::HashMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        let mut keys: Vec<&str> = from(&map).select(|(k, _)| *k).to_vec();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(from(&map).select(|(_, v)| *v).max(), Ok(2));
    }
}
