//! # sorted-search — Binary Search over Sorted Slices
//!
//! Bisection primitives for already-sorted sequences: membership lookup,
//! first/last occurrence within duplicate runs, and insertion-point (lower
//! bound) computation. All operations are pure, allocation-free, and run in
//! *O*(*log n*) time.
//!
//! ## What this crate is
//!
//! A small family of search routines, nothing more. The input is a slice the
//! caller promises is sorted in non-decreasing order; the routines never
//! verify that promise, never mutate the slice, and hold no state between
//! calls. Violating the sortedness precondition yields an unspecified (but
//! defined) index or "not found" — never a panic.
//!
//! ## Quick Start
//!
//! ```rust
//! use sorted_search::prelude::*;
//!
//! let data = [2, 4, 6, 8, 10, 12, 14];
//!
//! assert_eq!(search(&data, &10), Some(4));
//! assert_eq!(search(&data, &5), None);
//! assert_eq!(insertion_point(&data, &5), 2);
//! ```
//!
//! Duplicate runs are located with the first/last variants:
//!
//! ```rust
//! use sorted_search::prelude::*;
//!
//! let data = [1, 2, 2, 2, 3, 4, 4, 5];
//!
//! assert_eq!(find_first(&data, &2), Some(1));
//! assert_eq!(find_last(&data, &2), Some(3));
//! ```
//!
//! ## The fluent searcher
//!
//! [`SortedSearch`](prelude::SortedSearch) wraps the free functions behind
//! a builder that can distinguish a *missing* sequence from an *empty* one.
//! `position`, `position_recursive`, and `insertion_point` report a missing
//! sequence as `SearchError::MissingSequence`; `first` and `last` treat it
//! as an ordinary miss. The asymmetry is deliberate and part of the
//! contract.
//!
//! ```rust
//! use sorted_search::prelude::*;
//!
//! let data = [1, 3, 5, 7, 9];
//!
//! let searcher = SortedSearch::new().sequence(&data);
//! assert_eq!(searcher.position(&7)?, Some(3));
//! assert_eq!(searcher.insertion_point(&4)?, 2);
//!
//! // No sequence attached: fallible operations error, first/last miss.
//! let unset: SortedSearch<'_, i32> = SortedSearch::new();
//! assert!(unset.position(&7).is_err());
//! assert_eq!(unset.first(&7), None);
//! # Result::<(), SearchError>::Ok(())
//! ```
//!
//! ## Custom comparison
//!
//! Every operation has a `_by` form taking a three-way comparator, following
//! the `slice::binary_search_by` convention: the closure receives an element
//! and returns its [`Ordering`](core::cmp::Ordering) relative to the target.
//! This is how non-`Ord` element types (floats included, via
//! [`float_cmp`](prelude::float_cmp)) are searched:
//!
//! ```rust
//! use sorted_search::prelude::*;
//!
//! let xs = [0.5, 1.25, 2.0, 3.75];
//! let target = 2.0;
//!
//! assert_eq!(search_by(&xs, |x| float_cmp(x, &target)), Some(2));
//! ```
//!
//! ## `no_std`
//!
//! The crate is `no_std`-compatible and allocation-free. Disable default
//! features to drop the standard library:
//!
//! ```toml
//! [dependencies]
//! sorted-search = { version = "0.1", default-features = false }
//! ```
//!
//! The only thing the `std` feature provides is the `std::error::Error`
//! impl for [`SearchError`](prelude::SearchError).

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - error type and comparison helpers.
mod primitives;

// Layer 2: Algorithms - the bisection core.
mod algorithms;

// Layer 3: Engine - pre-flight validation.
mod engine;

// High-level fluent API for sorted-sequence search.
mod api;

// Standard sorted-search prelude.
pub mod prelude {
    pub use crate::api::{
        find_first, find_first_by, find_last, find_last_by, float_cmp, insertion_point,
        insertion_point_by, search, search_by, search_recursive, search_recursive_by, SearchError,
        SortedSearch,
    };
}
