//! Threshold search, also known as the "two crystal balls" problem: find the
//! first position at which a monotonic predicate flips from `false` to
//! `true`, probing the sequence in blocks of `√n` elements.
//!
//! The first "ball" jumps ahead one block at a time until it lands on a
//! `true` (or runs off the end). The second "ball" then walks forward one
//! element at a time from the last block start known to be `false`, up to and
//! including the index where the first ball stopped.

use tracing::trace;

/// Returns the index of the first `true` in a monotonic sequence of
/// booleans, or [`None`] if every element is `false`.
///
/// The sequence is expected to be monotonic: every `false` precedes every
/// `true`.
///
/// # Time Complexity
///
/// Takes *O*(√*n*) time. The coarse pass makes at most √*n* + 1 jumps of
/// √*n* elements, and the linear pass examines at most √*n* + 1 elements.
///
/// # Examples
///
/// ```
/// use linked_dsa::prelude::*;
///
/// assert_eq!(two_crystal_balls(&[]), None);
/// assert_eq!(two_crystal_balls(&[false, false, false, false]), None);
/// assert_eq!(two_crystal_balls(&[false, false, false, true]), Some(3));
/// assert_eq!(
///     two_crystal_balls(&[false, false, false, false, false, true, true]),
///     Some(5)
/// );
/// ```
pub fn two_crystal_balls(breaks: &[bool]) -> Option<usize> {
    first_true_by(breaks, |&broke| broke)
}

/// Returns the index of the first element for which `pred` returns `true`,
/// or [`None`] if there is no such element.
///
/// `pred` must be monotonic over `arr`: once it returns `true` for some
/// element it must return `true` for every element after it. The result for
/// non-monotonic input is unspecified but never out of bounds.
///
/// # Time Complexity
///
/// Takes *O*(√*n*) calls to `pred`.
///
/// # Examples
///
/// ```
/// use linked_dsa::prelude::*;
///
/// let heights = [1, 3, 4, 8, 9, 12, 15, 21];
///
/// assert_eq!(first_true_by(&heights, |&h| h >= 9), Some(4));
/// assert_eq!(first_true_by(&heights, |&h| h > 100), None);
/// ```
pub fn first_true_by<T, F>(arr: &[T], mut pred: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    let len = arr.len();
    if len == 0 {
        return None;
    }

    // `len >= 1`, so `step >= 1` and the coarse pass always advances.
    let step = len.isqrt();

    let mut coarse = 0;
    while coarse < len && !pred(&arr[coarse]) {
        coarse += step;
    }

    // Back up to the last block start confirmed to be `false`. Every index
    // before it is `false` too, and the break point is no later than
    // `coarse` (or the end of the sequence).
    let start = coarse.saturating_sub(step);
    let end = coarse.min(len - 1);

    trace!(len, step, coarse, start, "crystal ball coarse pass finished");

    (start..=end).find(|&i| pred(&arr[i]))
}
