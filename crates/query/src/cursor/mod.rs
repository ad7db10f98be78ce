//! Cursor implementations.
//!
//! `IterCursor` and `StorageCursor` read from containers; every other cursor
//! here wraps one (or, for `ConcatCursor`, two) inner cursors.

mod concat;
mod filter;
mod select;
mod skip;
mod skip_while;
mod source;
mod storage;
mod take;
mod take_while;

pub use concat::ConcatCursor;
pub use filter::FilterCursor;
pub use select::SelectCursor;
pub use skip::SkipCursor;
pub use skip_while::SkipWhileCursor;
pub use source::IterCursor;
pub use storage::{SharedStorage, StorageCursor};
pub use take::TakeCursor;
pub use take_while::TakeWhileCursor;
