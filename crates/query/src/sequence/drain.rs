//! Eager drain-and-rebuild operators: group_by, order_by and join.
//!
//! Unlike the lazy adaptors these walk their input as soon as they are
//! called. Upstream adaptors still run lazily, pulled by the drain; the
//! returned sequence reads the populated sink.
//!
//! The plain variants allocate the sink themselves (`S: Default`) and return
//! an `OwnedSequence` over its contents in the sink's own iteration order.
//! The `*_into` variants populate a caller-supplied sink and return a view
//! borrowing it.

use super::{OwnedSequence, Sequence};
use crate::cursor::IterCursor;
use crate::source::{from, from_shared};
use alloc::rc::Rc;
use alloc::vec::Vec;
use lazyq_core::Cursor;
use tracing::trace;

/// Borrowed view over a populated sink.
pub type SinkSequence<'s, S> = Sequence<IterCursor<<&'s S as IntoIterator>::IntoIter>>;

impl<C: Cursor> Sequence<C> {
    /// Drains every element through `insert`, then returns a sequence over
    /// the resulting sink.
    ///
    /// `insert` decides the grouping key and strategy, e.g.
    /// `|groups: &mut BTreeMap<K, Vec<V>>, e| groups.entry(key(&e)).or_default().push(e)`.
    pub fn group_by<S, F>(&self, insert: F) -> OwnedSequence<S::Item>
    where
        S: Default + IntoIterator,
        S::Item: Clone,
        F: FnMut(&mut S, C::Item),
    {
        let mut sink = S::default();
        let drained = self.drain_into(&mut sink, insert);
        trace!(drained, "group_by drained input");
        rebuild(sink)
    }

    /// Like `group_by`, writing into a caller-supplied `sink`.
    pub fn group_by_into<'s, S, F>(&self, sink: &'s mut S, insert: F) -> SinkSequence<'s, S>
    where
        &'s S: IntoIterator,
        <&'s S as IntoIterator>::IntoIter: ExactSizeIterator + Clone,
        <&'s S as IntoIterator>::Item: Clone,
        F: FnMut(&mut S, C::Item),
    {
        let drained = self.drain_into(sink, insert);
        trace!(drained, "group_by drained input into caller sink");
        let sink: &'s S = sink;
        from(sink)
    }

    /// Drains every element through `build`, calls `finalize` once (usually
    /// to sort the sink), then returns a sequence over the sink.
    pub fn order_by<S, B, Z>(&self, build: B, finalize: Z) -> OwnedSequence<S::Item>
    where
        S: Default + IntoIterator,
        S::Item: Clone,
        B: FnMut(&mut S, C::Item),
        Z: FnOnce(&mut S),
    {
        let mut sink = S::default();
        let drained = self.drain_into(&mut sink, build);
        finalize(&mut sink);
        trace!(drained, "order_by drained and finalized input");
        rebuild(sink)
    }

    /// Like `order_by`, writing into a caller-supplied `sink`.
    pub fn order_by_into<'s, S, B, Z>(
        &self,
        sink: &'s mut S,
        build: B,
        finalize: Z,
    ) -> SinkSequence<'s, S>
    where
        &'s S: IntoIterator,
        <&'s S as IntoIterator>::IntoIter: ExactSizeIterator + Clone,
        <&'s S as IntoIterator>::Item: Clone,
        B: FnMut(&mut S, C::Item),
        Z: FnOnce(&mut S),
    {
        let drained = self.drain_into(sink, build);
        finalize(sink);
        trace!(drained, "order_by drained input into caller sink");
        let sink: &'s S = sink;
        from(sink)
    }

    /// Nested-loop join against `other`.
    ///
    /// For every element `x` of this sequence, `other` is walked in full and
    /// `combine(sink, x, y)` runs for each `y` with
    /// `key_left(&x) == key_right(&y)`. Matches are produced outer-major,
    /// inner-minor.
    pub fn join<S, C2, K, KL, KR, F>(
        &self,
        other: &Sequence<C2>,
        key_left: KL,
        key_right: KR,
        combine: F,
    ) -> OwnedSequence<S::Item>
    where
        S: Default + IntoIterator,
        S::Item: Clone,
        C2: Cursor,
        C::Item: Clone,
        K: PartialEq,
        KL: Fn(&C::Item) -> K,
        KR: Fn(&C2::Item) -> K,
        F: FnMut(&mut S, C::Item, C2::Item),
    {
        let mut sink = S::default();
        self.join_loop(&mut sink, other, key_left, key_right, combine);
        rebuild(sink)
    }

    /// Like `join`, writing into a caller-supplied `sink`.
    pub fn join_into<'s, S, C2, K, KL, KR, F>(
        &self,
        sink: &'s mut S,
        other: &Sequence<C2>,
        key_left: KL,
        key_right: KR,
        combine: F,
    ) -> SinkSequence<'s, S>
    where
        &'s S: IntoIterator,
        <&'s S as IntoIterator>::IntoIter: ExactSizeIterator + Clone,
        <&'s S as IntoIterator>::Item: Clone,
        C2: Cursor,
        C::Item: Clone,
        K: PartialEq,
        KL: Fn(&C::Item) -> K,
        KR: Fn(&C2::Item) -> K,
        F: FnMut(&mut S, C::Item, C2::Item),
    {
        self.join_loop(sink, other, key_left, key_right, combine);
        let sink: &'s S = sink;
        from(sink)
    }

    fn drain_into<S, F>(&self, sink: &mut S, mut insert: F) -> usize
    where
        F: FnMut(&mut S, C::Item),
    {
        let mut drained = 0;
        for value in self.iter() {
            insert(sink, value);
            drained += 1;
        }
        drained
    }

    fn join_loop<S, C2, K, KL, KR, F>(
        &self,
        sink: &mut S,
        other: &Sequence<C2>,
        key_left: KL,
        key_right: KR,
        mut combine: F,
    ) where
        C2: Cursor,
        C::Item: Clone,
        K: PartialEq,
        KL: Fn(&C::Item) -> K,
        KR: Fn(&C2::Item) -> K,
        F: FnMut(&mut S, C::Item, C2::Item),
    {
        let mut outer = 0usize;
        let mut matches = 0usize;
        for left in self.iter() {
            outer += 1;
            let key = key_left(&left);
            for right in other.iter() {
                if key == key_right(&right) {
                    combine(sink, left.clone(), right);
                    matches += 1;
                }
            }
        }
        trace!(outer, matches, "join drained input");
    }
}

/// Moves the sink's contents into shared storage.
fn rebuild<S>(sink: S) -> OwnedSequence<S::Item>
where
    S: IntoIterator,
    S::Item: Clone,
{
    let items: Vec<S::Item> = sink.into_iter().collect();
    from_shared(Rc::new(items))
}
