//! Error types for sorted-sequence search operations.
//!
//! ## Purpose
//!
//! This module defines the single error condition that can occur when
//! searching: invoking a fallible operation on a searcher that was never
//! given a sequence.
//!
//! ## Design notes
//!
//! * **Minimal**: Exactly one error kind exists; every other input — empty
//!   sequence, no match, duplicate values — is a normal, defined outcome.
//! * **No-std**: Implements `Display` via `core::fmt`; the
//!   `std::error::Error` impl is gated on the `std` feature.
//!
//! ## Invariants
//!
//! * Only the sequence-presence check produces an error. The search
//!   routines themselves are infallible.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation itself.
//! * This module does not report unsorted input; sortedness is an unchecked
//!   precondition.

#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorted-sequence search operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A fallible operation was invoked before a sequence was attached.
    ///
    /// Distinct from an attached *empty* sequence, which is valid input.
    MissingSequence,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MissingSequence => {
                write!(
                    f,
                    "No sequence attached: call .sequence() before searching"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SearchError {}
