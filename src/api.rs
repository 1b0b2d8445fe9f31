//! High-level API for sorted-sequence search.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: the
//! [`SortedSearch`] fluent searcher, plus re-exports of the free search
//! functions from the algorithms layer.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent configuration; attach a sequence once, then run
//!   any number of lookups against it.
//! * **Absent vs. empty**: The searcher distinguishes a sequence that was
//!   never attached from an attached empty one. Only the former is an
//!   error, and only for the operations that promise it.
//! * **Borrowed**: The searcher borrows the sequence; nothing is copied.
//!
//! ## Key concepts
//!
//! * **Fallible operations**: `position`, `position_recursive`, and
//!   `insertion_point` return `Err(MissingSequence)` when no sequence was
//!   attached.
//! * **Infallible operations**: `first` and `last` fold the missing-sequence
//!   case into an ordinary `None`. The asymmetry is part of the contract
//!   and is intentionally not unified.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported operations
pub use crate::algorithms::bisection::{
    find_first, find_first_by, find_last, find_last_by, insertion_point, insertion_point_by,
    search, search_by,
};
pub use crate::algorithms::recursion::{search_recursive, search_recursive_by};
pub use crate::primitives::errors::SearchError;
pub use crate::primitives::ordering::float_cmp;

// ============================================================================
// Fluent Searcher
// ============================================================================

/// Fluent searcher over a borrowed sorted slice.
///
/// ```
/// use sorted_search::prelude::*;
///
/// let data = [2, 4, 6, 8, 10, 12, 14];
///
/// let searcher = SortedSearch::new().sequence(&data);
/// assert_eq!(searcher.position(&10)?, Some(4));
/// # Result::<(), SearchError>::Ok(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SortedSearch<'a, T> {
    /// The attached sequence, if any.
    sequence: Option<&'a [T]>,
}

impl<T> Default for SortedSearch<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> SortedSearch<'a, T> {
    /// Create a searcher with no sequence attached.
    pub fn new() -> Self {
        Self { sequence: None }
    }

    /// Attach the sorted sequence to search.
    ///
    /// Sortedness (non-decreasing order) is the caller's responsibility and
    /// is never verified.
    pub fn sequence(mut self, sequence: &'a [T]) -> Self {
        self.sequence = Some(sequence);
        self
    }

    // ========================================================================
    // Comparator Operations
    // ========================================================================

    /// Comparator form of [`position`](Self::position).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingSequence`] when no sequence was
    /// attached.
    pub fn position_by<F>(&self, compare: F) -> Result<Option<usize>, SearchError>
    where
        F: FnMut(&T) -> Ordering,
    {
        let sequence = Validator::require_sequence(self.sequence)?;
        Ok(search_by(sequence, compare))
    }

    /// Comparator form of [`insertion_point`](Self::insertion_point).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingSequence`] when no sequence was
    /// attached.
    pub fn insertion_point_by<F>(&self, compare: F) -> Result<usize, SearchError>
    where
        F: FnMut(&T) -> Ordering,
    {
        let sequence = Validator::require_sequence(self.sequence)?;
        Ok(insertion_point_by(sequence, compare))
    }
}

impl<T: Ord> SortedSearch<'_, T> {
    // ========================================================================
    // Fallible Operations
    // ========================================================================

    /// Locate `target`, returning its index or `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingSequence`] when no sequence was
    /// attached. An attached empty sequence is valid and yields `Ok(None)`.
    pub fn position(&self, target: &T) -> Result<Option<usize>, SearchError> {
        let sequence = Validator::require_sequence(self.sequence)?;
        Ok(search(sequence, target))
    }

    /// Locate `target` via the recursive variant.
    ///
    /// Produces the same result as [`position`](Self::position) for every
    /// input.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingSequence`] when no sequence was
    /// attached.
    pub fn position_recursive(&self, target: &T) -> Result<Option<usize>, SearchError> {
        let sequence = Validator::require_sequence(self.sequence)?;
        Ok(search_recursive(sequence, target))
    }

    /// Compute the lower-bound insertion point for `target`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingSequence`] when no sequence was
    /// attached. An attached empty sequence is valid and yields `Ok(0)`.
    pub fn insertion_point(&self, target: &T) -> Result<usize, SearchError> {
        let sequence = Validator::require_sequence(self.sequence)?;
        Ok(insertion_point(sequence, target))
    }

    // ========================================================================
    // Infallible Operations
    // ========================================================================

    /// Smallest index holding a value equal to `target`, or `None`.
    ///
    /// A missing sequence is treated as an ordinary miss, not an error.
    pub fn first(&self, target: &T) -> Option<usize> {
        self.sequence
            .and_then(|sequence| find_first(sequence, target))
    }

    /// Largest index holding a value equal to `target`, or `None`.
    ///
    /// A missing sequence is treated as an ordinary miss, not an error.
    pub fn last(&self, target: &T) -> Option<usize> {
        self.sequence
            .and_then(|sequence| find_last(sequence, target))
    }
}
