//! Hash map filtering and shallow copies of maps and lists.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Entries of `source` for which `predicate(key, value)` holds.
///
/// The result shares the source map's hasher configuration.
pub fn filter_entries<K, V, S, F>(
    source: &HashMap<K, V, S>,
    mut predicate: F,
) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
    F: FnMut(&K, &V) -> bool,
{
    let mut result = HashMap::with_hasher(source.hasher().clone());
    for (key, value) in source {
        if predicate(key, value) {
            result.insert(key.clone(), value.clone());
        }
    }
    result
}

/// Shallow copy of a map; `None` yields an empty map.
pub fn clone_map<K, V, S>(source: Option<&HashMap<K, V, S>>) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone + Default,
{
    source.cloned().unwrap_or_default()
}

/// Shallow copy of a list, same order; `None` yields an empty list.
pub fn clone_list<T>(source: Option<&[T]>) -> Vec<T>
where
    T: Clone,
{
    source.map(<[T]>::to_vec).unwrap_or_default()
}
