//! Three-way comparison helpers.
//!
//! ## Purpose
//!
//! The `_by` search operations accept any `FnMut(&T) -> Ordering`
//! comparator. This module provides the one comparator the standard library
//! cannot derive for free: a total order over floating-point values, which
//! are not `Ord`.
//!
//! ## Design notes
//!
//! * **Totality**: `float_cmp` orders NaN after every other value so that a
//!   sorted-with-NaN-at-the-end sequence bisects consistently.
//! * **Generics**: Generic over `Float` types (`f32`, `f64`).

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Float Comparison
// ============================================================================

/// Total three-way comparison for floating-point values.
///
/// Behaves like `partial_cmp` for comparable values and resolves the
/// incomparable cases by ordering NaN greater than everything else, with
/// NaN equal to NaN.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use sorted_search::prelude::*;
///
/// assert_eq!(float_cmp(&1.0, &2.0), Ordering::Less);
/// assert_eq!(float_cmp(&f64::NAN, &2.0), Ordering::Greater);
/// assert_eq!(float_cmp(&f64::NAN, &f64::NAN), Ordering::Equal);
/// ```
#[inline]
pub fn float_cmp<T: Float>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| {
        // At least one side is NaN; NaN sorts last.
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // partial_cmp only fails when a NaN is involved.
            (false, false) => Ordering::Equal,
        }
    })
}
