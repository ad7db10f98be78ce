//! Folding and aggregation.

use super::Sequence;
use core::ops::Add;
use lazyq_core::{Cursor, Error, Result};
use num_traits::{AsPrimitive, Num};
use tracing::debug;

impl<C: Cursor> Sequence<C> {
    /// Folds the sequence with `function`, seeded by the first element.
    pub fn aggregate<F>(&self, function: F) -> Result<C::Item>
    where
        F: Fn(C::Item, C::Item) -> C::Item,
    {
        let mut iter = self.iter();
        let Some(seed) = iter.next() else {
            debug!("aggregate over an empty sequence");
            return Err(Error::empty_collection());
        };
        Ok(iter.fold(seed, function))
    }

    /// Sums the elements with `+`.
    pub fn sum(&self) -> Result<C::Item>
    where
        C::Item: Add<Output = C::Item>,
    {
        self.aggregate(|left, right| left + right)
    }

    /// Returns the largest element; the earliest one wins a tie.
    pub fn max(&self) -> Result<C::Item>
    where
        C::Item: PartialOrd,
    {
        self.aggregate(|left, right| if left < right { right } else { left })
    }

    /// Returns the smallest element; the earliest one wins a tie.
    pub fn min(&self) -> Result<C::Item>
    where
        C::Item: PartialOrd,
    {
        self.aggregate(|left, right| if right < left { right } else { left })
    }

    /// Averages the elements as `R`.
    ///
    /// Elements and the count are converted with `as` semantics, so an
    /// integer `R` gives integer division.
    pub fn average<R>(&self) -> Result<R>
    where
        R: Num + Copy + 'static,
        C::Item: AsPrimitive<R>,
        usize: AsPrimitive<R>,
    {
        let (total, count) = self.iter().fold((R::zero(), 0usize), |(total, count), value| {
            let value: R = value.as_();
            (total + value, count + 1)
        });
        if count == 0 {
            debug!("average over an empty sequence");
            return Err(Error::empty_collection());
        }
        let count: R = count.as_();
        Ok(total / count)
    }
}
