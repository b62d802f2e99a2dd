//! Errors returned by fail-fast [crate::BoolVec] operations.

use thiserror::Error;

/// Error type for [crate::BoolVec] operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("index out of bounds: {index} (len = {len})")]
    OutOfBounds { index: usize, len: usize },
    #[error("invalid range: {from} > {to}")]
    InvalidRange { from: usize, to: usize },
    #[error("cursor has no current element")]
    NoCurrent,
}
