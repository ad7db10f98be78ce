//! lazyq Query - Deferred-execution query operators over in-memory sequences.
//!
//! This crate provides:
//!
//! - `source`: entry points (`from`, `from_cursors`, `from_shared`)
//! - `cursor`: source cursors and the adaptor cursors (select, filter, take, skip,
//!   take_while, skip_while, concat, shared storage)
//! - `sequence`: the `Sequence` view with lazy composition, scalar extraction,
//!   materialization, aggregation and the eager group_by / order_by / join drains
//!
//! # Example
//!
//! ```rust
//! use lazyq_query::from;
//!
//! let v = vec![4, 5, 6, 1, 2, 3, 7, 8, 9];
//!
//! let odd = from(&v).filter(|x| *x % 2 == 1).select(|x| *x);
//! assert_eq!(odd.to_vec(), vec![5, 1, 3, 7, 9]);
//! assert_eq!(odd.sum(), Ok(25));
//!
//! let sorted = from(&v)
//!     .copied()
//!     .order_by(|sink: &mut Vec<i32>, x| sink.push(x), |sink| sink.sort());
//! assert_eq!(sorted.first(), Ok(1));
//! ```

#![no_std]

extern crate alloc;

pub mod cursor;
pub mod sequence;
mod source;

pub use lazyq_core::{Cursor, CursorIter, Error, Result};
pub use sequence::{KeyedSink, OwnedSequence, Sequence, SinkSequence};
pub use source::{from, from_cursors, from_shared};
