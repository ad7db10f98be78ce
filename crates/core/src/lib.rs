//! lazyq Core - Cursor contract and error types for lazyq.
//!
//! This crate provides the foundational pieces every lazyq sequence builds on:
//!
//! - `Cursor`: a movable position with `current` / `advance` and end detection by equality
//! - `CursorIter`: a std `Iterator` over a `[begin, end)` cursor pair
//! - `Error`: failures raised by terminal operators
//!
//! # Example
//!
//! ```rust
//! use lazyq_core::{Cursor, CursorIter};
//!
//! #[derive(Clone, PartialEq)]
//! struct Upto(u8);
//!
//! impl Cursor for Upto {
//!     type Item = u8;
//!
//!     fn current(&self) -> Option<u8> {
//!         Some(self.0)
//!     }
//!
//!     fn advance(&mut self) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let values: Vec<u8> = CursorIter::new(Upto(1), Upto(4)).collect();
//! assert_eq!(values, vec![1, 2, 3]);
//! ```

#![no_std]

extern crate alloc;

mod cursor;
mod error;

pub use cursor::{Cursor, CursorIter};
pub use error::{Error, Result};
