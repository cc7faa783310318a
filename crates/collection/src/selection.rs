//! Selection over slices: deduplication, predicates, partitioning and sums.

use std::collections::HashSet;
use std::hash::Hash;
use std::iter::Sum;

/// Unique elements in first-seen order, compared by `Eq`/`Hash`.
pub fn distinct<T>(slice: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(slice.len());
    slice
        .iter()
        .filter(|&item| seen.insert(item))
        .cloned()
        .collect()
}

/// Unique elements in first-seen order, compared by a caller equality.
///
/// `equal` should behave like an equivalence relation. Each element is checked
/// against the ones already kept, so this is quadratic in the number of
/// distinct elements; prefer [`distinct`] when `T: Eq + Hash`.
pub fn distinct_by<T, F>(slice: &[T], mut equal: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut unique: Vec<T> = Vec::new();
    for item in slice {
        if !unique.iter().any(|kept| equal(kept, item)) {
            unique.push(item.clone());
        }
    }
    unique
}

/// True when at least one element satisfies `predicate`; stops at the first.
pub fn exists<T, F>(slice: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    slice.iter().any(predicate)
}

/// Split into `(matching, rest)`, each keeping the original relative order.
pub fn partition<T, F>(slice: &[T], mut predicate: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for item in slice {
        if predicate(item) {
            matching.push(item.clone());
        } else {
            rest.push(item.clone());
        }
    }
    (matching, rest)
}

/// Number of elements satisfying `predicate`.
pub fn count<T, F>(slice: &[T], mut predicate: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    slice.iter().filter(|&item| predicate(item)).count()
}

/// Arithmetic sum; zero for an empty slice.
///
/// Follows Rust's overflow semantics for `T`: integer overflow panics in
/// debug builds and wraps in release builds. Use [`std::num::Wrapping`]
/// elements for wrapping in every profile, or check bounds beforehand.
pub fn sum<T>(slice: &[T]) -> T
where
    T: Copy + Sum<T>,
{
    slice.iter().copied().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_ints() {
        assert_eq!(distinct(&[1, 2, 3, 2, 4, 5, 4, 6]), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_distinct_strings_keep_first_seen_order() {
        let fruit = ["apple", "banana", "apple", "orange", "banana"];
        assert_eq!(distinct(&fruit), vec!["apple", "banana", "orange"]);
    }

    #[test]
    fn test_distinct_empty() {
        let empty: [u8; 0] = [];
        assert!(distinct(&empty).is_empty());
    }

    #[test]
    fn test_distinct_by_direct_equality_matches_distinct() {
        let items = [1, 2, 3, 2, 4, 5, 4, 6];
        assert_eq!(distinct_by(&items, |a, b| a == b), distinct(&items));
    }

    #[test]
    fn test_distinct_by_uses_supplied_equality() {
        let words = ["Go", "rust", "GO", "Rust", "zig"];
        let unique = distinct_by(&words, |a, b| a.eq_ignore_ascii_case(b));
        assert_eq!(unique, vec!["Go", "rust", "zig"]);
    }

    #[test]
    fn test_distinct_by_on_floats() {
        let readings = [1.0, 1.04, 2.0, 1.96, 3.5];
        let unique = distinct_by(&readings, |a: &f64, b: &f64| (a - b).abs() < 0.1);
        assert_eq!(unique, vec![1.0, 2.0, 3.5]);
    }

    #[test]
    fn test_exists() {
        assert!(exists(&[1, 3, 4], |&n| n % 2 == 0));
        assert!(!exists(&[1, 3, 5], |&n| n % 2 == 0));
        let empty: [i32; 0] = [];
        assert!(!exists(&empty, |_| true));
    }

    #[test]
    fn test_exists_short_circuits() {
        let mut calls = 0;
        assert!(exists(&[10, 20, 30], |&n| {
            calls += 1;
            n == 20
        }));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_partition_even_odd() {
        let (even, odd) = partition(&[1, 2, 3, 4, 5, 6], |&n| n % 2 == 0);
        assert_eq!(even, vec![2, 4, 6]);
        assert_eq!(odd, vec![1, 3, 5]);
    }

    #[test]
    fn test_partition_empty_gives_two_empty_buckets() {
        let empty: [i32; 0] = [];
        let (yes, no) = partition(&empty, |_| true);
        assert!(yes.is_empty());
        assert!(no.is_empty());
    }

    #[test]
    fn test_count() {
        assert_eq!(count(&["a", "bb", "ccc", "dd"], |s| s.len() == 2), 2);
        assert_eq!(count(&[1, 2, 3], |_| false), 0);
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[1, 2, 3, 4]), 10);
        assert_eq!(sum(&[1.5f64, 2.5]), 4.0);
        let empty: [i64; 0] = [];
        assert_eq!(sum(&empty), 0);
    }

    #[test]
    fn test_sum_wrapping_elements_wrap() {
        use std::num::Wrapping;
        let total = sum(&[Wrapping(i32::MAX), Wrapping(1)]);
        assert_eq!(total, Wrapping(i32::MIN));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overflow")]
    fn test_sum_overflow_panics_in_debug() {
        let _ = sum(&[i32::MAX, 1]);
    }
}
