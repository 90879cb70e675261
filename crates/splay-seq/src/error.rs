//! Error type and the bounds checks every facade operation runs before
//! touching the tree.

use thiserror::Error;

/// Errors raised by [`SplaySeq`](crate::SplaySeq) operations.
///
/// Every index is checked before the tree is touched, so an error always
/// leaves the sequence unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeqError {
    /// `start..end` does not fit a sequence of length `len`. Single-index
    /// operations report `end = start + 1`.
    #[error("index out of range: {start}..{end} in a sequence of length {len}")]
    IndexOutOfRange { start: usize, end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SeqError>;

/// Checks a single position `k` against `[0, len)`.
pub(crate) fn check_index(k: usize, len: usize) -> Result<()> {
    if k < len {
        Ok(())
    } else {
        log::debug!("rejected index {k} for length {len}");
        Err(SeqError::IndexOutOfRange {
            start: k,
            end: k.saturating_add(1),
            len,
        })
    }
}

/// Checks a half-open range `start..end` against `[0, len]`.
pub(crate) fn check_range(start: usize, end: usize, len: usize) -> Result<()> {
    if start <= end && end <= len {
        Ok(())
    } else {
        log::debug!("rejected range {start}..{end} for length {len}");
        Err(SeqError::IndexOutOfRange { start, end, len })
    }
}
