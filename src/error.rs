//! Error types for fallible container operations.

use thiserror::Error;

/// Convenience alias for results returned by this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors returned when a container rejects a call.
///
/// Lookups and removals never produce an `Error`; a missing element is
/// reported as [`None`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An insertion was attempted at an index past the end of the list.
    ///
    /// Valid insertion indices are `0..=len`.
    #[error("insertion index {index} is out of bounds for list of length {len}")]
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
}
