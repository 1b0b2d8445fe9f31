//! Recursive search variant.
//!
//! ## Purpose
//!
//! This module provides the recursive form of membership search. It exists
//! for callers who want the divide-and-conquer structure explicit; the
//! results are identical to the iterative [`bisection::search`] for every
//! input, a property the test suite enforces.
//!
//! ## Design notes
//!
//! * **Stack depth**: The window halves on every call, so recursion depth
//!   is *O*(*log n*).
//!
//! [`bisection::search`]: crate::algorithms::bisection::search

// External dependencies
use core::cmp::Ordering;

// ============================================================================
// Recursive Search
// ============================================================================

/// Recursive form of [`search`](crate::algorithms::bisection::search).
///
/// # Examples
///
/// ```
/// use sorted_search::prelude::*;
///
/// let data = [2, 4, 6, 8, 10, 12, 14];
///
/// assert_eq!(search_recursive(&data, &10), Some(4));
/// assert_eq!(search_recursive(&data, &5), None);
/// ```
#[inline]
pub fn search_recursive<T: Ord>(sequence: &[T], target: &T) -> Option<usize> {
    search_recursive_by(sequence, |element| element.cmp(target))
}

/// Comparator form of [`search_recursive`].
pub fn search_recursive_by<T, F>(sequence: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    bisect(sequence, 0, sequence.len(), &mut compare)
}

/// Bisect the half-open window `[lo, hi)` until it is empty or a match is
/// found.
fn bisect<T, F>(sequence: &[T], lo: usize, hi: usize, compare: &mut F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    // Base case: empty window.
    if lo >= hi {
        return None;
    }

    let mid = lo + (hi - lo) / 2;

    match compare(&sequence[mid]) {
        Ordering::Equal => Some(mid),
        Ordering::Less => bisect(sequence, mid + 1, hi, compare),
        Ordering::Greater => bisect(sequence, lo, mid, compare),
    }
}
