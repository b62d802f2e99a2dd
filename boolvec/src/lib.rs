//! A growable vector of booleans.
//!
//! # Overview
//!
//! [BoolVec] keeps one `bool` per slot in a fixed-capacity buffer and tracks its length
//! separately from that capacity. Appends are amortized O(1): a full buffer is reallocated to twice
//! its capacity (10 slots the first time). Removal preserves the order of the remaining elements by
//! shifting them left, which is O(n). Nothing is ever reallocated down; [BoolVec::clear] only
//! resets the length.
//!
//! Index-accepting operations come in two flavors:
//! - fail-fast ([BoolVec::get], [BoolVec::set], [BoolVec::remove_at], ...) return an [Error]
//! - fail-soft ([BoolVec::get_or], [BoolVec::get_or_none], [BoolVec::set_or_discard], ...)
//!   substitute a default or do nothing
//!
//! `BoolVec` is not synchronized. Wrap it in a lock to share it between threads.
//!
//! # Example
//!
//! ```
//! use boolvec::{boolvec, BoolVec, Error};
//!
//! let mut bv = BoolVec::new();
//! bv.add(true);
//! bv.add(false);
//! bv.add(true);
//! assert_eq!(bv.to_string(), "[true,false,true]");
//! assert_eq!(bv.capacity(), 10);
//!
//! assert_eq!(bv.remove_at(1), Ok(false));
//! assert_eq!(bv.to_string(), "[true,true]");
//! assert_eq!(bv.index_of(false), None);
//!
//! assert!(!bv.get_or(5, false));
//! assert_eq!(bv.get(5), Err(Error::OutOfBounds { index: 5, len: 2 }));
//!
//! // Remove while iterating
//! let mut bv = boolvec![true, false, false, true];
//! let mut cursor = bv.cursor();
//! while let Some(value) = cursor.next() {
//!     if !value {
//!         cursor.remove().unwrap();
//!     }
//! }
//! assert_eq!(bv, [true, true]);
//! ```

mod error;
pub use error::Error;
pub mod iter;
pub use iter::{Cursor, IntoIter, Iter};
mod vector;
pub use vector::{BoolVec, INITIAL_CAPACITY};

/// Creates a [BoolVec] holding the given values, with a capacity equal to their count.
///
/// ```
/// use boolvec::boolvec;
///
/// let bv = boolvec![true, false];
/// assert_eq!(bv.len(), 2);
/// assert_eq!(bv.capacity(), 2);
/// assert!(boolvec![].is_empty());
/// ```
#[macro_export]
macro_rules! boolvec {
    () => {
        $crate::BoolVec::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::BoolVec::from_slice(&[$($value),+])
    };
}
