//! Ordering and extreme-value selection.

use std::cmp::Ordering;
use tracing::trace;

/// Turn a strict-weak-ordering "less than" answer pair into an [`Ordering`].
fn ordering_from_less(a_before_b: bool, b_before_a: bool) -> Ordering {
    if a_before_b {
        Ordering::Less
    } else if b_before_a {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Reorder `list` in place using an index-to-index predicate.
///
/// `less(items, i, j)` reports whether the element originally at position
/// `i` sorts before the one originally at `j`. `items` is always the list as
/// it was before sorting began, so the predicate never observes a
/// half-shuffled list. Returns the same, now sorted, slice for chaining.
///
/// Ties keep their original relative order; break them explicitly inside
/// `less` when a particular tie order matters.
///
/// ```
/// use fpkit_collection::sort;
///
/// let mut words = vec!["pear", "fig", "banana"];
/// sort(&mut words, |items, i, j| items[i].len() < items[j].len());
/// assert_eq!(words, ["fig", "pear", "banana"]);
/// ```
pub fn sort<T, F>(list: &mut [T], mut less: F) -> &mut [T]
where
    F: FnMut(&[T], usize, usize) -> bool,
{
    trace!(len = list.len(), "sorting by index predicate");

    let mut order: Vec<usize> = (0..list.len()).collect();
    {
        let frozen: &[T] = list;
        order.sort_by(|&a, &b| ordering_from_less(less(frozen, a, b), less(frozen, b, a)));
    }

    apply_permutation(list, &order);
    list
}

/// Reorder `list` in place with an element predicate `less(a, b)`.
pub fn sort_by<T, F>(list: &mut [T], mut less: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> bool,
{
    list.sort_by(|a, b| ordering_from_less(less(a, b), less(b, a)));
    list
}

/// Move `list[order[k]]` to position `k` for every `k`, following cycles.
fn apply_permutation<T>(list: &mut [T], order: &[usize]) {
    let mut placed = vec![false; list.len()];
    for start in 0..list.len() {
        if placed[start] {
            continue;
        }
        let mut current = start;
        loop {
            placed[current] = true;
            let next = order[current];
            if next == start {
                break;
            }
            list.swap(current, next);
            current = next;
        }
    }
}

/// Greatest element under `PartialOrd`; `None` for an empty slice.
///
/// The first of several equal maxima is returned.
pub fn max<T>(slice: &[T]) -> Option<T>
where
    T: PartialOrd + Clone,
{
    let (first, rest) = slice.split_first()?;
    let mut best = first;
    for item in rest {
        if item > best {
            best = item;
        }
    }
    Some(best.clone())
}

/// Least element under `PartialOrd`; `None` for an empty slice.
pub fn min<T>(slice: &[T]) -> Option<T>
where
    T: PartialOrd + Clone,
{
    let (first, rest) = slice.split_first()?;
    let mut best = first;
    for item in rest {
        if item < best {
            best = item;
        }
    }
    Some(best.clone())
}

/// Element whose `key` is greatest; the first one wins ties.
///
/// Unlike [`Iterator::max_by_key`], which keeps the last maximum, later
/// elements only replace the current pick when their key is strictly greater.
pub fn max_by_key<T, K, F>(slice: &[T], key: F) -> Option<T>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    extreme_by_key(slice, key, Ordering::Greater)
}

/// Element whose `key` is least; the first one wins ties.
pub fn min_by_key<T, K, F>(slice: &[T], key: F) -> Option<T>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    extreme_by_key(slice, key, Ordering::Less)
}

fn extreme_by_key<T, K, F>(slice: &[T], mut key: F, wanted: Ordering) -> Option<T>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let (first, rest) = slice.split_first()?;
    let mut best = first;
    let mut best_key = key(first);
    for item in rest {
        let candidate = key(item);
        if candidate.partial_cmp(&best_key) == Some(wanted) {
            best = item;
            best_key = candidate;
        }
    }
    Some(best.clone())
}
