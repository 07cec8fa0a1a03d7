//! Error types for vector operations.
//!
//! Allocation failure and out-of-range access are the only two fallible
//! conditions in the crate. Both are recoverable: callers can retry a
//! smaller reservation, free other resources, or repair an index. The
//! documented no-ops ([`ZVec::pop`](crate::ZVec::pop) on an empty vector,
//! removal at a past-the-end index, releasing an already-empty vector) are
//! benign and never reported through this type.

use std::error::Error;
use std::fmt;

/// Errors that can occur during vector operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VecError {
    /// The backing buffer could not be allocated or grown.
    ///
    /// The vector is unchanged: its previous buffer, length, and contents
    /// are intact, so the caller may retry with a smaller request.
    AllocationFailed {
        /// Number of element slots that were requested.
        requested: usize,
    },
    /// An index-based access referred past the live region `[0, len)`.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of live elements at the time of the access.
        len: usize,
    },
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: requested {requested} element slots")
            }
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for VecError {}
