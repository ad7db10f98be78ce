//! Property-based tests for lazy adaptors and terminal operators.
//!
//! Each property compares a composed sequence against the equivalent
//! computation on a plain `Vec`.

use lazyq_query::{from, Error};
use proptest::prelude::*;

/// Strategy for generating small integer vectors.
fn values_strategy(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000i32..1000i32, 0..max_len)
}

proptest! {
    /// Property: select equals an elementwise map, order preserved.
    #[test]
    fn select_is_elementwise(values in values_strategy(64), offset in -50i32..50) {
        let projected = from(&values).select(|x| x + offset).to_vec();
        let expected: Vec<i32> = values.iter().map(|x| x + offset).collect();
        prop_assert_eq!(projected, expected);
    }

    /// Property: filter keeps exactly the matching subsequence.
    #[test]
    fn filter_is_order_preserving_subsequence(values in values_strategy(64), modulus in 1i32..7) {
        let kept = from(&values).copied().filter(|x| x.rem_euclid(modulus) == 0).to_vec();
        let expected: Vec<i32> = values.iter().copied().filter(|x| x.rem_euclid(modulus) == 0).collect();
        prop_assert!(kept.iter().all(|x| x.rem_euclid(modulus) == 0));
        prop_assert_eq!(kept, expected);
    }

    /// Property: take(n) yields the min(n, len) prefix.
    #[test]
    fn take_yields_prefix(values in values_strategy(64), n in 0usize..80) {
        let taken = from(&values).copied().take(n).to_vec();
        prop_assert_eq!(taken.len(), n.min(values.len()));
        prop_assert_eq!(&taken[..], &values[..taken.len()]);
    }

    /// Property: skip(n) yields the suffix after n - 1 elements.
    #[test]
    fn skip_drops_n_minus_one(values in values_strategy(64), n in 0usize..80) {
        let skipped = from(&values).copied().skip(n).to_vec();
        let dropped = n.saturating_sub(1).min(values.len());
        prop_assert_eq!(&skipped[..], &values[dropped..]);
    }

    /// Property: take_while equals the std prefix scan.
    #[test]
    fn take_while_matches_std(values in values_strategy(64), limit in -1000i32..1000) {
        let taken = from(&values).copied().take_while(|x| *x < limit).to_vec();
        let expected: Vec<i32> = values.iter().copied().take_while(|x| *x < limit).collect();
        prop_assert_eq!(taken, expected);
    }

    /// Property: skip_while drops at most the single leading element.
    #[test]
    fn skip_while_drops_at_most_one(values in values_strategy(64), limit in -1000i32..1000) {
        let rest = from(&values).copied().skip_while(|x| *x < limit).to_vec();
        let dropped = usize::from(values.first().is_some_and(|x| *x < limit));
        prop_assert_eq!(&rest[..], &values[dropped..]);
    }

    /// Property: concat equals the two materializations back to back.
    #[test]
    fn concat_is_append(left in values_strategy(32), right in values_strategy(32)) {
        let joined = from(&left).concat(&from(&right)).copied().to_vec();
        let mut expected = left.clone();
        expected.extend_from_slice(&right);
        prop_assert_eq!(joined, expected);
    }

    /// Property: count, first, last and at agree with the materialized vector.
    #[test]
    fn scalars_agree_with_vec(values in values_strategy(64), index in 0usize..80) {
        let seq = from(&values).copied();
        prop_assert_eq!(seq.count(), values.len());
        prop_assert_eq!(seq.is_empty(), values.is_empty());

        match values.first() {
            Some(first) => prop_assert_eq!(seq.first(), Ok(*first)),
            None => prop_assert_eq!(seq.first(), Err(Error::EmptyCollection)),
        }
        match values.last() {
            Some(last) => prop_assert_eq!(seq.last(), Ok(*last)),
            None => prop_assert_eq!(seq.last(), Err(Error::EmptyCollection)),
        }
        match values.get(index) {
            Some(value) => prop_assert_eq!(seq.at(index), Ok(*value)),
            None => prop_assert_eq!(seq.at(index), Err(Error::index_out_of_range(index, values.len()))),
        }
    }

    /// Property: sum, min and max agree with std on non-empty input.
    #[test]
    fn aggregates_agree_with_std(values in values_strategy(64)) {
        let seq = from(&values).copied().select(i64::from);
        if values.is_empty() {
            prop_assert_eq!(seq.sum(), Err(Error::EmptyCollection));
        } else {
            prop_assert_eq!(seq.sum(), Ok(values.iter().map(|x| i64::from(*x)).sum::<i64>()));
            prop_assert_eq!(seq.min(), Ok(i64::from(*values.iter().min().unwrap())));
            prop_assert_eq!(seq.max(), Ok(i64::from(*values.iter().max().unwrap())));
        }
    }

    /// Property: terminal operators are idempotent on a lazy pipeline.
    #[test]
    fn terminal_calls_are_idempotent(values in values_strategy(64)) {
        let seq = from(&values).copied().filter(|x| x % 3 != 0).select(|x| x * 2).take(20);
        prop_assert_eq!(seq.to_vec(), seq.to_vec());
        prop_assert_eq!(seq.count(), seq.count());
    }

    /// Property: join count equals the number of key-matching pairs.
    #[test]
    fn join_count_matches_pairs(left in values_strategy(24), right in values_strategy(24)) {
        let joined = from(&left).copied().join(
            &from(&right).copied(),
            |x| x.rem_euclid(5),
            |y| y.rem_euclid(5),
            |sink: &mut Vec<(i32, i32)>, x, y| sink.push((x, y)),
        );

        let mut expected = Vec::new();
        for x in &left {
            for y in &right {
                if x.rem_euclid(5) == y.rem_euclid(5) {
                    expected.push((*x, *y));
                }
            }
        }
        prop_assert_eq!(joined.to_vec(), expected);
    }

    /// Property: order_by with a sort finalizer equals a sorted copy.
    #[test]
    fn order_by_sorts(values in values_strategy(64)) {
        let ordered = from(&values)
            .copied()
            .order_by(|sink: &mut Vec<i32>, x| sink.push(x), |sink| sink.sort());
        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(ordered.to_vec(), expected);
    }
}
