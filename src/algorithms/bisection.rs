//! Iterative bisection over sorted slices.
//!
//! ## Purpose
//!
//! This module implements the iterative search loops: membership lookup,
//! first/last occurrence within a duplicate run, and the lower-bound
//! insertion point. Each operation exists in a `_by` form taking a
//! three-way comparator and an `Ord` convenience wrapper.
//!
//! ## Design notes
//!
//! * **Comparator convention**: The closure receives an element and returns
//!   its ordering relative to the target, as in `slice::binary_search_by`.
//! * **Midpoint**: Always computed as `lo + (hi - lo) / 2`, which cannot
//!   overflow; the naive `(lo + hi) / 2` can when the bounds approach
//!   `usize::MAX`.
//! * **Bounds**: The loops maintain a half-open window `[lo, hi)`, the
//!   natural form for `usize` indices (the closed-interval form needs a
//!   `mid - 1` that underflows at index 0).
//!
//! ## Invariants
//!
//! * Input slices must be sorted in non-decreasing order by the comparison
//!   relation. This precondition is never checked; violating it yields an
//!   unspecified index or `None`, never a panic.
//! * The window only ever shrinks, so every loop terminates.
//! * No operation mutates or clones the input.
//!
//! ## Non-goals
//!
//! * This module does not validate input; see the engine layer.
//! * This module does not sort.

// External dependencies
use core::cmp::Ordering;

// ============================================================================
// Membership Search
// ============================================================================

/// Returns the index of an element matching `target`, or [`None`].
///
/// When `target` occurs more than once, which occurrence is returned is
/// unspecified; use [`find_first`] or [`find_last`] to pin down a run.
///
/// # Time Complexity
///
/// *O*(*log n*) comparisons, *O*(1) auxiliary space.
///
/// # Examples
///
/// ```
/// use sorted_search::prelude::*;
///
/// let data = [2, 4, 6, 8, 10, 12, 14];
///
/// assert_eq!(search(&data, &10), Some(4));
/// assert_eq!(search(&data, &5), None);
/// ```
#[inline]
pub fn search<T: Ord>(sequence: &[T], target: &T) -> Option<usize> {
    search_by(sequence, |element| element.cmp(target))
}

/// Comparator form of [`search`].
///
/// `compare` receives an element and returns its ordering relative to the
/// target.
pub fn search_by<T, F>(sequence: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut lo = 0;
    let mut hi = sequence.len();

    // Invariant: if a match exists, its index lies in [lo, hi).
    while lo < hi {
        let mid = lo + (hi - lo) / 2;

        match compare(&sequence[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    None
}

// ============================================================================
// Duplicate Runs
// ============================================================================

/// Returns the smallest index holding a value equal to `target`, or [`None`].
///
/// # Examples
///
/// ```
/// use sorted_search::prelude::*;
///
/// let data = [1, 2, 2, 2, 3, 4, 4, 5];
///
/// assert_eq!(find_first(&data, &2), Some(1));
/// ```
#[inline]
pub fn find_first<T: Ord>(sequence: &[T], target: &T) -> Option<usize> {
    find_first_by(sequence, |element| element.cmp(target))
}

/// Comparator form of [`find_first`].
pub fn find_first_by<T, F>(sequence: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut lo = 0;
    let mut hi = sequence.len();
    let mut found = None;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;

        match compare(&sequence[mid]) {
            // Record the hit, then keep narrowing left for an earlier one.
            Ordering::Equal => {
                found = Some(mid);
                hi = mid;
            }
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    found
}

/// Returns the largest index holding a value equal to `target`, or [`None`].
///
/// # Examples
///
/// ```
/// use sorted_search::prelude::*;
///
/// let data = [1, 2, 2, 2, 3, 4, 4, 5];
///
/// assert_eq!(find_last(&data, &2), Some(3));
/// ```
#[inline]
pub fn find_last<T: Ord>(sequence: &[T], target: &T) -> Option<usize> {
    find_last_by(sequence, |element| element.cmp(target))
}

/// Comparator form of [`find_last`].
pub fn find_last_by<T, F>(sequence: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut lo = 0;
    let mut hi = sequence.len();
    let mut found = None;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;

        match compare(&sequence[mid]) {
            // Record the hit, then keep narrowing right for a later one.
            Ordering::Equal => {
                found = Some(mid);
                lo = mid + 1;
            }
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    found
}

// ============================================================================
// Insertion Point
// ============================================================================

/// Returns the lower-bound insertion point for `target`.
///
/// The result `p` is the unique index in `[0, len]` such that every element
/// before `p` is strictly less than `target` and every element at or after
/// `p` is greater than or equal to it. Inserting at `p` preserves sort
/// order; when `target` already occurs, `p` is the start of its run.
///
/// # Examples
///
/// ```
/// use sorted_search::prelude::*;
///
/// let data = [1, 3, 5, 7, 9];
///
/// assert_eq!(insertion_point(&data, &4), 2);
/// assert_eq!(insertion_point(&data, &0), 0);
/// assert_eq!(insertion_point(&data, &10), 5);
/// ```
#[inline]
pub fn insertion_point<T: Ord>(sequence: &[T], target: &T) -> usize {
    insertion_point_by(sequence, |element| element.cmp(target))
}

/// Comparator form of [`insertion_point`].
pub fn insertion_point_by<T, F>(sequence: &[T], mut compare: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    let mut lo = 0;
    let mut hi = sequence.len();

    // No equality short-circuit: an equal element still narrows left, so
    // the loop converges on the leftmost valid position.
    while lo < hi {
        let mid = lo + (hi - lo) / 2;

        if compare(&sequence[mid]) == Ordering::Less {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}
