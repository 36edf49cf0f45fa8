//! Error types for positional operations.
//!
//! Absence of data (an out-of-range [`at`](crate::OrderedSet::at), a missing
//! value in [`index_of`](crate::OrderedSet::index_of)) is reported as `None`
//! and is not an error. The errors here describe misuse of positions.

use thiserror::Error;

/// Error returned by [`OrderedSet::slice`](crate::OrderedSet::slice) when the
/// requested range does not fit the set.
///
/// Bounds are checked against the length observed when the call is made. If
/// both bounds are wrong, the end bound is reported first.
///
/// # Examples
///
/// ```rust
/// use orderedset::{OrderedSet, SliceError};
///
/// let set: OrderedSet<i32> = (1..=3).collect();
/// assert_eq!(
///     set.slice(1, 5).unwrap_err(),
///     SliceError::EndOutOfRange { to: 5, len: 3 }
/// );
/// assert_eq!(
///     set.slice(2, 1).unwrap_err(),
///     SliceError::StartAfterEnd { from: 2, to: 1 }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SliceError {
    /// The exclusive end bound is past the last position.
    #[error("to index {to} is out of range for length {len}")]
    EndOutOfRange {
        /// The requested end bound.
        to: usize,
        /// The length of the set at the time of the call.
        len: usize,
    },
    /// The start bound lies after the end bound.
    #[error("from index {from} is greater than to index {to}")]
    StartAfterEnd {
        /// The requested start bound.
        from: usize,
        /// The requested end bound.
        to: usize,
    },
}

impl SliceError {
    /// Validates `from..to` against `len`, in the documented order of precedence.
    pub(crate) const fn check(from: usize, to: usize, len: usize) -> Result<(), Self> {
        if to > len {
            return Err(Self::EndOutOfRange { to, len });
        }
        if from > to {
            return Err(Self::StartAfterEnd { from, to });
        }
        Ok(())
    }
}
