//! Sequence transforms: map, filter, flatten, fold and iteration.
//!
//! Every function here borrows its input and returns a freshly allocated
//! result, preserving the relative order of the elements it keeps. An empty
//! input always yields an empty (never absent) result.

use fpkit_core::{BoxError, Error, Result};
use tracing::debug;

/// Apply `transform` to every element, one output per input, in order.
pub fn map<T, U, F>(source: &[T], transform: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    source.iter().map(transform).collect()
}

/// Keep the elements for which `predicate` holds, in order.
pub fn filter<T, F>(source: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    source
        .iter()
        .filter(|&item| predicate(item))
        .cloned()
        .collect()
}

/// Concatenate a sequence of sequences into one flat sequence.
pub fn flatten<T, S>(source: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let total = source.iter().map(|inner| inner.as_ref().len()).sum();
    let mut result = Vec::with_capacity(total);
    for inner in source {
        result.extend_from_slice(inner.as_ref());
    }
    result
}

/// Left fold: `combine(combine(initial, s[0]), s[1])...`.
///
/// An empty `source` returns `initial` untouched.
pub fn reduce<T, A, F>(source: &[T], combine: F, initial: A) -> A
where
    F: FnMut(A, &T) -> A,
{
    source.iter().fold(initial, combine)
}

/// Run `action` once per element, in order, for its side effects.
pub fn for_each<T, F>(source: &[T], action: F)
where
    F: FnMut(&T),
{
    source.iter().for_each(action);
}

/// Run a fallible `action` per element, stopping at the first failure.
///
/// The failure is returned as-is; elements after it are never visited.
pub fn try_for_each<T, E, F>(source: &[T], mut action: F) -> std::result::Result<(), E>
where
    F: FnMut(&T) -> std::result::Result<(), E>,
{
    for (index, item) in source.iter().enumerate() {
        if let Err(err) = action(item) {
            debug!(index, len = source.len(), "for_each action failed");
            return Err(err);
        }
    }
    Ok(())
}

/// Map with a fallible `transform`.
///
/// On the first failure no partial output is returned; the error names the
/// zero-based index of the offending element:
///
/// ```
/// use fpkit_collection::try_map;
///
/// let err = try_map(&[1, 2, 3], |&n| {
///     if n == 3 { Err(format!("fake error for {n}")) } else { Ok(n * 10) }
/// })
/// .unwrap_err();
/// assert_eq!(err.to_string(), "error mapping at index:'2', error: fake error for 3");
/// ```
pub fn try_map<T, U, E, F>(source: &[T], mut transform: F) -> Result<Vec<U>>
where
    E: Into<BoxError>,
    F: FnMut(&T) -> std::result::Result<U, E>,
{
    let mut result = Vec::with_capacity(source.len());
    for (index, item) in source.iter().enumerate() {
        match transform(item) {
            Ok(value) => result.push(value),
            Err(err) => {
                let cause: BoxError = err.into();
                debug!(index, error = %cause, "mapping closure failed");
                return Err(Error::mapping(index, cause));
            }
        }
    }
    Ok(result)
}

/// Left fold with a fallible `combine`; failures carry the element index.
pub fn try_reduce<T, A, E, F>(source: &[T], mut combine: F, initial: A) -> Result<A>
where
    E: Into<BoxError>,
    F: FnMut(A, &T) -> std::result::Result<A, E>,
{
    let mut acc = initial;
    for (index, item) in source.iter().enumerate() {
        acc = match combine(acc, item) {
            Ok(next) => next,
            Err(err) => {
                let cause: BoxError = err.into();
                debug!(index, error = %cause, "fold closure failed");
                return Err(Error::reduce(index, cause));
            }
        };
    }
    Ok(acc)
}
