//! Tests for the iterative bisection loops.
//!
//! These tests verify the core search operations over sorted slices:
//! - Membership lookup (hit and miss)
//! - First/last occurrence within duplicate runs
//! - Lower-bound insertion points
//! - Comparator-based and non-`Ord` element types
//!
//! ## Test Organization
//!
//! 1. **Membership Search** - Hits, misses, extremes
//! 2. **Boundary Cases** - Empty and single-element sequences
//! 3. **Duplicate Runs** - First/last occurrence and run structure
//! 4. **Insertion Points** - Lower-bound positions
//! 5. **Comparator Forms** - Custom orderings, strings, floats

use core::cmp::Ordering;

use sorted_search::prelude::*;

// ============================================================================
// Membership Search Tests
// ============================================================================

/// Test the reference scenario: hit in the middle of an even-spaced slice.
#[test]
fn test_search_hit() {
    let data = [2, 4, 6, 8, 10, 12, 14];
    assert_eq!(search(&data, &10), Some(4));
}

/// Test a miss that falls between two present values.
#[test]
fn test_search_miss_between_elements() {
    let data = [2, 4, 6, 8, 10, 12, 14];
    assert_eq!(search(&data, &5), None);
}

/// Test hits at both ends of the slice.
#[test]
fn test_search_first_and_last_elements() {
    let data = [2, 4, 6, 8, 10, 12, 14];
    assert_eq!(search(&data, &2), Some(0));
    assert_eq!(search(&data, &14), Some(6));
}

/// Test misses beyond either end of the slice.
#[test]
fn test_search_out_of_range_targets() {
    let data = [2, 4, 6, 8, 10, 12, 14];
    assert_eq!(search(&data, &1), None);
    assert_eq!(search(&data, &99), None);
}

/// Test that a hit always indexes an equal element.
#[test]
fn test_search_hit_indexes_equal_element() {
    let data = [1, 4, 4, 4, 9, 16, 25];

    for target in 0..30 {
        if let Some(i) = search(&data, &target) {
            assert_eq!(data[i], target, "hit at {i} must equal target {target}");
        } else {
            assert!(!data.contains(&target), "{target} present but not found");
        }
    }
}

/// Test two-element sequences, where the window collapses fastest.
#[test]
fn test_search_two_elements() {
    let data = [3, 7];
    assert_eq!(search(&data, &3), Some(0));
    assert_eq!(search(&data, &7), Some(1));
    assert_eq!(search(&data, &5), None);
}

// ============================================================================
// Boundary Case Tests
// ============================================================================

/// Test that an empty sequence always misses.
#[test]
fn test_search_empty() {
    let data: [i32; 0] = [];
    assert_eq!(search(&data, &5), None);
}

/// Test single-element sequences, matching and not.
#[test]
fn test_search_single_element() {
    let data = [5];
    assert_eq!(search(&data, &5), Some(0));
    assert_eq!(search(&data, &3), None);
}

/// Test that first/last also handle empty and single-element input.
#[test]
fn test_find_first_last_boundaries() {
    let empty: [i32; 0] = [];
    assert_eq!(find_first(&empty, &1), None);
    assert_eq!(find_last(&empty, &1), None);

    let single = [42];
    assert_eq!(find_first(&single, &42), Some(0));
    assert_eq!(find_last(&single, &42), Some(0));
    assert_eq!(find_first(&single, &41), None);
}

// ============================================================================
// Duplicate Run Tests
// ============================================================================

/// Test the reference duplicate scenario.
#[test]
fn test_find_first_and_last_in_run() {
    let data = [1, 2, 2, 2, 3, 4, 4, 5];

    assert_eq!(find_first(&data, &2), Some(1));
    assert_eq!(find_last(&data, &2), Some(3));
    assert_eq!(find_first(&data, &4), Some(5));
    assert_eq!(find_last(&data, &4), Some(6));
}

/// Test that first/last agree on values occurring exactly once.
#[test]
fn test_find_first_last_unique_value() {
    let data = [1, 2, 2, 2, 3, 4, 4, 5];

    assert_eq!(find_first(&data, &3), Some(4));
    assert_eq!(find_last(&data, &3), Some(4));
}

/// Test a slice that is one long duplicate run.
#[test]
fn test_find_first_last_all_equal() {
    let data = [7; 9];

    assert_eq!(find_first(&data, &7), Some(0));
    assert_eq!(find_last(&data, &7), Some(8));
}

/// Test the run structure around a duplicate value: strictly smaller
/// before the run, strictly greater after it, equal inside.
#[test]
fn test_duplicate_run_structure() {
    let data = [0, 3, 3, 3, 3, 8, 9];
    let target = 3;

    let lo = find_first(&data, &target).unwrap();
    let hi = find_last(&data, &target).unwrap();

    assert!(lo <= hi);
    for i in lo..=hi {
        assert_eq!(data[i], target);
    }
    assert!(lo == 0 || data[lo - 1] < target);
    assert!(hi + 1 == data.len() || data[hi + 1] > target);
}

/// Test that plain search lands somewhere inside the run.
#[test]
fn test_search_lands_inside_run() {
    let data = [1, 2, 4, 4, 4, 5, 6];
    let result = search(&data, &4);
    assert!(matches!(result, Some(2..=4)));
}

// ============================================================================
// Insertion Point Tests
// ============================================================================

/// Test the reference insertion-point scenarios.
#[test]
fn test_insertion_point_reference_cases() {
    let data = [1, 3, 5, 7, 9];

    assert_eq!(insertion_point(&data, &4), 2);
    assert_eq!(insertion_point(&data, &0), 0);
    assert_eq!(insertion_point(&data, &10), 5);
}

/// Test that an empty sequence yields position 0.
#[test]
fn test_insertion_point_empty() {
    let data: [i32; 0] = [];
    assert_eq!(insertion_point(&data, &5), 0);
}

/// Test that a present target yields the leftmost position of its run,
/// never an early return from an equality hit.
#[test]
fn test_insertion_point_is_leftmost_on_equal() {
    let data = [1, 2, 2, 2, 3];
    assert_eq!(insertion_point(&data, &2), 1);

    let all_equal = [5; 6];
    assert_eq!(insertion_point(&all_equal, &5), 0);
}

/// Test the lower-bound partition property across every target.
#[test]
fn test_insertion_point_partitions() {
    let data = [2, 4, 4, 6, 8, 8, 8, 11];

    for target in 0..14 {
        let p = insertion_point(&data, &target);
        assert!(p <= data.len());
        assert!(data[..p].iter().all(|&e| e < target));
        assert!(data[p..].iter().all(|&e| e >= target));
    }
}

// ============================================================================
// Comparator Form Tests
// ============================================================================

/// Test string slices through the `Ord` wrappers.
#[test]
fn test_search_strings() {
    let data = ["apple", "banana", "cherry", "date", "elderberry"];

    assert_eq!(search(&data, &"cherry"), Some(2));
    assert_eq!(search(&data, &"grape"), None);
    assert_eq!(insertion_point(&data, &"grape"), 4);
}

/// Test an explicit comparator over a descending slice.
#[test]
fn test_search_by_reversed_order() {
    let data = [14, 12, 10, 8, 6, 4, 2];
    let target = 10;

    // Element-vs-target comparison under the reversed relation.
    let found = search_by(&data, |e| target.cmp(e));
    assert_eq!(found, Some(2));
}

/// Test searching a struct slice by key with a comparator.
#[test]
fn test_search_by_key_extraction() {
    let data = [(1, "a"), (4, "b"), (9, "c"), (16, "d")];

    assert_eq!(search_by(&data, |e| e.0.cmp(&9)), Some(2));
    assert_eq!(find_first_by(&data, |e| e.0.cmp(&2)), None);
    assert_eq!(insertion_point_by(&data, |e| e.0.cmp(&5)), 2);
}

/// Test float sequences through `float_cmp`.
#[test]
fn test_search_floats() {
    let xs = [0.5, 1.25, 2.0, 3.75];

    let target = 2.0;
    assert_eq!(search_by(&xs, |x| float_cmp(x, &target)), Some(2));

    let miss = 1.5;
    assert_eq!(search_by(&xs, |x| float_cmp(x, &miss)), None);
    assert_eq!(insertion_point_by(&xs, |x| float_cmp(x, &miss)), 2);
}

/// Test that `float_cmp` orders NaN after every finite value.
#[test]
fn test_float_cmp_nan_ordering() {
    assert_eq!(float_cmp(&1.0, &2.0), Ordering::Less);
    assert_eq!(float_cmp(&2.0, &2.0), Ordering::Equal);
    assert_eq!(float_cmp(&f64::NAN, &f64::INFINITY), Ordering::Greater);
    assert_eq!(float_cmp(&f64::NEG_INFINITY, &f64::NAN), Ordering::Less);
    assert_eq!(float_cmp(&f64::NAN, &f64::NAN), Ordering::Equal);
}

/// Test duplicate-run variants through comparators on floats.
#[test]
fn test_find_first_last_by_floats() {
    let xs = [1.0, 2.5, 2.5, 2.5, 4.0];
    let target = 2.5;

    assert_eq!(find_first_by(&xs, |x| float_cmp(x, &target)), Some(1));
    assert_eq!(find_last_by(&xs, |x| float_cmp(x, &target)), Some(3));
}
