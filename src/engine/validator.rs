//! Pre-flight validation for search operations.
//!
//! ## Purpose
//!
//! This module provides the sequence-presence check shared by the fallible
//! operations of [`SortedSearch`](crate::api::SortedSearch). It is the only
//! validation in the crate: sortedness is an unchecked precondition, and an
//! attached empty sequence is valid input.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: The check runs before any comparison is made.
//! * **Asymmetry**: `first`/`last` bypass this check by contract and treat
//!   a missing sequence as an ordinary miss.

// Internal dependencies
use crate::primitives::errors::SearchError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for search inputs.
///
/// Methods return `Result<_, SearchError>` and fail fast on the first
/// violation.
pub struct Validator;

impl Validator {
    /// Unwrap an attached sequence, or fail with
    /// [`SearchError::MissingSequence`].
    pub fn require_sequence<T>(sequence: Option<&[T]>) -> Result<&[T], SearchError> {
        sequence.ok_or(SearchError::MissingSequence)
    }
}
